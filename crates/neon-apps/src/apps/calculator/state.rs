//! Calculator State
//!
//! Serialization for the calculator display and result history.

use serde::Serialize;

/// A completed calculation kept in the history list
#[derive(Clone, Debug, Serialize)]
pub struct HistoryEntry {
    /// Expression as entered, e.g. "2+3*4"
    pub expression: String,
    /// Formatted result, e.g. "14"
    pub result: String,
}

/// Calculator state sent to the shell
#[derive(Clone, Debug, Serialize)]
pub struct CalculatorState<'a> {
    /// Current display text ("0" when the expression is empty)
    pub display: &'a str,
    /// Most recent calculations, newest first
    pub history: &'a [HistoryEntry],
}

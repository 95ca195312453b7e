//! Error types for Neon apps
//!
//! Defines errors that can occur during app execution.

/// Errors that can occur in app execution.
#[derive(Clone, Debug, thiserror::Error)]
pub enum AppError {
    /// Initialization failed with the given reason.
    #[error("initialization failed: {0}")]
    InitFailed(String),

    /// An input value could not be accepted.
    #[error("invalid input for {field}: {reason}")]
    InvalidInput {
        field: &'static str,
        reason: String,
    },
}

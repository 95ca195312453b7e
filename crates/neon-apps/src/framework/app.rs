//! NeonApp trait and execution context
//!
//! Defines the interface that all Neon applications implement.

use super::error::AppError;
use super::manifest::AppManifest;
use crate::storage::Storage;

/// Execution context provided to app methods
pub struct AppContext<'a> {
    /// Wall-clock time in milliseconds since Unix epoch
    pub wallclock_ms: u64,

    /// Key-value storage for app persistence
    pub storage: &'a mut dyn Storage,
}

impl<'a> AppContext<'a> {
    /// Create a new context
    pub fn new(wallclock_ms: u64, storage: &'a mut dyn Storage) -> Self {
        Self {
            wallclock_ms,
            storage,
        }
    }
}

/// The interface that all Neon apps implement.
///
/// # Lifecycle
///
/// 1. **init()**: Called once at startup. Load persisted state, seed defaults.
/// 2. **tick()**: Called on every timer cycle. Advance time-driven state.
/// 3. **handle_button()** / **handle_text()**: Called for each user input
///    event delivered by the shell.
/// 4. **state_json()**: Read the full app state for rendering.
///
/// # Invariants
///
/// - `init()` is called exactly once before any other method
/// - Input handlers run synchronously between ticks, in delivery order
/// - Unknown button and field names are ignored
///
/// Apps run single-threaded in the WASM sandbox; no synchronization is
/// needed for app state.
pub trait NeonApp {
    /// Returns the static application manifest.
    ///
    /// The manifest declares the app's identity and default window
    /// geometry. It must be a compile-time constant.
    fn manifest() -> &'static AppManifest
    where
        Self: Sized;

    /// Called once at startup.
    ///
    /// Load persisted state from storage, seed defaults.
    ///
    /// # Errors
    ///
    /// Return `AppError::InitFailed` if the app cannot start.
    fn init(&mut self, _ctx: &mut AppContext) -> Result<(), AppError> {
        Ok(())
    }

    /// Called on every timer cycle.
    ///
    /// Advance clocks, progress bars, autosave timers.
    fn tick(&mut self, _ctx: &mut AppContext) {}

    /// Handle a named button press.
    ///
    /// # Errors
    ///
    /// Errors are logged by the shell but do not terminate the app.
    fn handle_button(&mut self, ctx: &mut AppContext, name: &str) -> Result<(), AppError>;

    /// Handle a text field change.
    ///
    /// # Errors
    ///
    /// Return `AppError::InvalidInput` for values the app cannot accept.
    fn handle_text(&mut self, _ctx: &mut AppContext, _field: &str, _value: &str) -> Result<(), AppError> {
        Ok(())
    }

    /// Serialize the current app state to JSON for the shell.
    fn state_json(&self) -> String;
}

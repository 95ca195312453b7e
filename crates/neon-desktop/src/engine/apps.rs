//! Application registry dispatch

use super::DesktopEngine;
use neon_apps::{AppContext, AppError, AppManifest};

impl DesktopEngine {
    /// Iterate over the manifests of all registered apps
    pub fn app_manifests(&self) -> impl Iterator<Item = &'static AppManifest> + '_ {
        self.apps.manifests()
    }

    /// Deliver a button press to an app.
    ///
    /// Unknown app ids are ignored.
    ///
    /// # Errors
    ///
    /// Propagates the app's `AppError` for invalid input.
    pub fn app_button(&mut self, app_id: &str, name: &str) -> Result<(), AppError> {
        let mut ctx = AppContext::new(self.clock_ms, self.storage.as_mut());
        self.apps.handle_button(&mut ctx, app_id, name)
    }

    /// Deliver a text field change to an app.
    ///
    /// Unknown app ids are ignored.
    ///
    /// # Errors
    ///
    /// Propagates the app's `AppError` for values it cannot accept.
    pub fn app_text(&mut self, app_id: &str, field: &str, value: &str) -> Result<(), AppError> {
        let mut ctx = AppContext::new(self.clock_ms, self.storage.as_mut());
        self.apps.handle_text(&mut ctx, app_id, field, value)
    }

    /// Read an app's state as JSON, or `None` for unknown ids
    pub fn app_state_json(&self, app_id: &str) -> Option<String> {
        self.apps.state_json(app_id)
    }
}

//! App registry
//!
//! Owns the running application instances and routes input events to them
//! by manifest id. Unknown app ids are ignored.

use super::app::{AppContext, NeonApp};
use super::error::AppError;
use super::manifest::AppManifest;

struct AppEntry {
    manifest: &'static AppManifest,
    app: Box<dyn NeonApp>,
}

/// Registry of running applications keyed by manifest id
#[derive(Default)]
pub struct AppRegistry {
    entries: Vec<AppEntry>,
}

impl AppRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register an app instance under its manifest id
    pub fn register<A>(&mut self, app: A)
    where
        A: NeonApp + 'static,
    {
        self.entries.push(AppEntry {
            manifest: A::manifest(),
            app: Box::new(app),
        });
    }

    /// Iterate over registered manifests in registration order
    pub fn manifests(&self) -> impl Iterator<Item = &'static AppManifest> + '_ {
        self.entries.iter().map(|e| e.manifest)
    }

    /// Initialize every registered app
    pub fn init_all(&mut self, ctx: &mut AppContext) -> Result<(), AppError> {
        for entry in &mut self.entries {
            entry.app.init(ctx)?;
        }
        Ok(())
    }

    /// Advance every registered app by one timer cycle
    pub fn tick_all(&mut self, ctx: &mut AppContext) {
        for entry in &mut self.entries {
            entry.app.tick(ctx);
        }
    }

    /// Route a button press to an app
    pub fn handle_button(
        &mut self,
        ctx: &mut AppContext,
        app_id: &str,
        name: &str,
    ) -> Result<(), AppError> {
        match self.app_mut(app_id) {
            Some(app) => app.handle_button(ctx, name),
            None => Ok(()),
        }
    }

    /// Route a text field change to an app
    pub fn handle_text(
        &mut self,
        ctx: &mut AppContext,
        app_id: &str,
        field: &str,
        value: &str,
    ) -> Result<(), AppError> {
        match self.app_mut(app_id) {
            Some(app) => app.handle_text(ctx, field, value),
            None => Ok(()),
        }
    }

    /// Read an app's state as JSON
    pub fn state_json(&self, app_id: &str) -> Option<String> {
        self.entries
            .iter()
            .find(|e| e.manifest.id == app_id)
            .map(|e| e.app.state_json())
    }

    /// Number of registered apps
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    fn app_mut(&mut self, app_id: &str) -> Option<&mut (dyn NeonApp + 'static)> {
        self.entries
            .iter_mut()
            .find(|e| e.manifest.id == app_id)
            .map(|e| e.app.as_mut())
    }
}

//! Browser-backed storage
//!
//! Implements the app storage interface on top of localStorage so app
//! state survives page reloads.

use neon_apps::Storage;

/// localStorage-backed storage for the browser build
pub struct LocalStorage {
    backend: web_sys::Storage,
}

impl LocalStorage {
    /// Acquire the window's localStorage.
    ///
    /// Returns `None` when localStorage is unavailable, as in sandboxed
    /// iframes; callers fall back to in-memory storage.
    pub fn new() -> Option<Self> {
        let backend = web_sys::window()?.local_storage().ok().flatten()?;
        Some(Self { backend })
    }
}

impl Storage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.backend.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        // A quota error leaves the previous value in place
        let _ = self.backend.set_item(key, value);
    }

    fn remove(&mut self, key: &str) {
        let _ = self.backend.remove_item(key);
    }
}

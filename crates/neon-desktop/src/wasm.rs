//! WASM exports for the desktop engine
//!
//! This module provides wasm-bindgen exports for the DesktopEngine,
//! allowing the shell to drive the desktop directly. State crosses the
//! boundary as JSON strings; events cross as plain scalars.

use wasm_bindgen::prelude::*;

use crate::engine::DesktopEngine;
use crate::math::Vec2;
use crate::storage::LocalStorage;
use crate::window::WindowRegion;
use neon_apps::{AppError, MemoryStorage, Storage};

// Import js_sys::Date for timestamps
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Date, js_name = now)]
    fn date_now() -> f64;
}

/// Log an app error to the browser console
fn report(context: &str, err: AppError) {
    web_sys::console::error_1(&format!("{context}: {err}").into());
}

/// Desktop controller for WASM - wraps DesktopEngine with JS-friendly API
#[wasm_bindgen]
pub struct DesktopController {
    engine: DesktopEngine,
}

#[wasm_bindgen]
impl DesktopController {
    /// Create a new desktop controller.
    ///
    /// Apps persist to localStorage when available, otherwise state
    /// lives only for the page's lifetime.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        let storage: Box<dyn Storage> = match LocalStorage::new() {
            Some(local) => Box::new(local),
            None => Box::new(MemoryStorage::new()),
        };
        Self {
            engine: DesktopEngine::with_storage(storage),
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Initialize all apps
    #[wasm_bindgen]
    pub fn init(&mut self) {
        if let Err(err) = self.engine.init(date_now() as u64) {
            report("init", err);
        }
    }

    /// Advance every app by one timer cycle
    #[wasm_bindgen]
    pub fn tick(&mut self) {
        self.engine.tick(date_now() as u64);
    }

    // =========================================================================
    // Windows
    // =========================================================================

    /// Open a window
    #[wasm_bindgen]
    pub fn open_window(&mut self, id: &str) {
        self.engine.open_window(id);
    }

    /// Close a window
    #[wasm_bindgen]
    pub fn close_window(&mut self, id: &str) {
        self.engine.close_window(id);
    }

    /// Focus a window
    #[wasm_bindgen]
    pub fn focus_window(&mut self, id: &str) {
        self.engine.focus_window(id);
    }

    /// Get the visible desktop as JSON
    #[wasm_bindgen]
    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&self.engine.snapshot()).unwrap_or_else(|_| "{}".to_string())
    }

    /// Get the installed apps as JSON, for the launcher
    #[wasm_bindgen]
    pub fn apps_json(&self) -> String {
        let apps: Vec<serde_json::Value> = self
            .engine
            .app_manifests()
            .map(|m| {
                serde_json::json!({
                    "id": m.id,
                    "name": m.name,
                    "description": m.description,
                })
            })
            .collect();
        serde_json::to_string(&apps).unwrap_or_else(|_| "[]".to_string())
    }

    // =========================================================================
    // Input Handling
    // =========================================================================

    /// Handle pointer down on a window region.
    ///
    /// `(x, y)` is the pointer position and `(origin_x, origin_y)` the
    /// window's rendered top-left corner, both in page coordinates.
    #[wasm_bindgen]
    pub fn pointer_down(
        &mut self,
        id: &str,
        region: &str,
        x: f32,
        y: f32,
        origin_x: f32,
        origin_y: f32,
    ) -> String {
        let result = match WindowRegion::parse(region) {
            Some(region) => self.engine.pointer_down(
                id,
                region,
                Vec2::new(x, y),
                Vec2::new(origin_x, origin_y),
            ),
            None => crate::input::InputResult::Unhandled,
        };
        serde_json::to_string(&result).unwrap_or_else(|_| r#"{"type":"unhandled"}"#.to_string())
    }

    /// Handle pointer move event
    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> String {
        let result = self.engine.pointer_move(Vec2::new(x, y));
        serde_json::to_string(&result).unwrap_or_else(|_| r#"{"type":"unhandled"}"#.to_string())
    }

    /// Handle pointer up event
    #[wasm_bindgen]
    pub fn pointer_up(&mut self) -> String {
        let result = self.engine.pointer_up();
        serde_json::to_string(&result).unwrap_or_else(|_| r#"{"type":"unhandled"}"#.to_string())
    }

    /// CSS cursor for a window region
    #[wasm_bindgen]
    pub fn region_cursor(&self, region: &str) -> String {
        match WindowRegion::parse(region) {
            Some(region) => region.cursor().to_string(),
            None => "default".to_string(),
        }
    }

    // =========================================================================
    // App Events
    // =========================================================================

    /// Deliver a button press to an app
    #[wasm_bindgen]
    pub fn app_button(&mut self, app_id: &str, name: &str) {
        if let Err(err) = self.engine.app_button(app_id, name) {
            report(app_id, err);
        }
    }

    /// Deliver a text field change to an app
    #[wasm_bindgen]
    pub fn app_text(&mut self, app_id: &str, field: &str, value: &str) {
        if let Err(err) = self.engine.app_text(app_id, field, value) {
            report(app_id, err);
        }
    }

    /// Get an app's state as JSON
    #[wasm_bindgen]
    pub fn app_state_json(&self, app_id: &str) -> String {
        self.engine
            .app_state_json(app_id)
            .unwrap_or_else(|| "{}".to_string())
    }
}

impl Default for DesktopController {
    fn default() -> Self {
        Self::new()
    }
}

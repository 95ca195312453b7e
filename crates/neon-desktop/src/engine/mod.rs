//! Desktop engine coordinating all components
//!
//! This module is split into focused submodules:
//! - `input`: Pointer event handling and the window drag gesture
//! - `windows`: Window lifecycle operations
//! - `apps`: Application registry dispatch

mod apps;
mod input;
mod windows;

use serde::Serialize;

use crate::input::InputRouter;
use crate::math::{Size, Vec2};
use crate::window::{Window, WindowManager};
use neon_apps::apps::{
    AutomationApp, CalculatorApp, ClockApp, CurrencyApp, EditorApp, MusicApp, ResourcesApp,
    TasksApp, UsersApp,
};
use neon_apps::{AppContext, AppError, AppRegistry, MemoryStorage, Storage};

/// Desktop engine coordinating all desktop components
///
/// This is the main entry point for desktop operations, managing:
/// - Window manager (visibility, focus, z-order)
/// - Input router (window drag state machine)
/// - App registry (running applications and their state)
/// - Storage backend shared by all apps
pub struct DesktopEngine {
    /// Window manager
    pub windows: WindowManager,
    /// Input router
    pub input: InputRouter,
    /// Running applications
    pub(crate) apps: AppRegistry,
    /// Storage backend handed to apps through their context
    pub(crate) storage: Box<dyn Storage>,
    /// Wall-clock time of the most recent init or tick, in ms
    pub(crate) clock_ms: u64,
}

impl Default for DesktopEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopEngine {
    /// Create an engine with in-memory storage
    pub fn new() -> Self {
        Self::with_storage(Box::new(MemoryStorage::new()))
    }

    /// Create an engine with the given storage backend.
    ///
    /// Registers every built-in app and one hidden window per app,
    /// titled and sized from the app's manifest.
    pub fn with_storage(storage: Box<dyn Storage>) -> Self {
        let mut apps = AppRegistry::new();
        apps.register(CalculatorApp::default());
        apps.register(TasksApp::default());
        apps.register(EditorApp::default());
        apps.register(UsersApp::default());
        apps.register(AutomationApp::default());
        apps.register(MusicApp::default());
        apps.register(CurrencyApp::default());
        apps.register(ClockApp::default());
        apps.register(ResourcesApp::default());

        let mut windows = WindowManager::new();
        for manifest in apps.manifests() {
            windows.register(Window::new(
                manifest.id,
                manifest.name,
                Size::new(manifest.default_width, manifest.default_height),
            ));
        }

        Self {
            windows,
            input: InputRouter::new(),
            apps,
            storage,
            clock_ms: 0,
        }
    }

    /// Initialize all apps.
    ///
    /// Must be called once before any input or tick. `wallclock_ms` is
    /// milliseconds since the Unix epoch as observed by the shell.
    ///
    /// # Errors
    ///
    /// Returns the first `AppError::InitFailed` reported by an app.
    pub fn init(&mut self, wallclock_ms: u64) -> Result<(), AppError> {
        self.clock_ms = wallclock_ms;
        let mut ctx = AppContext::new(wallclock_ms, self.storage.as_mut());
        self.apps.init_all(&mut ctx)
    }

    /// Advance every app by one timer cycle
    pub fn tick(&mut self, wallclock_ms: u64) {
        self.clock_ms = wallclock_ms;
        let mut ctx = AppContext::new(wallclock_ms, self.storage.as_mut());
        self.apps.tick_all(&mut ctx);
    }

    /// Snapshot of the visible desktop for rendering
    pub fn snapshot(&self) -> DesktopSnapshot<'_> {
        DesktopSnapshot {
            windows: self
                .windows
                .windows_by_z()
                .into_iter()
                .map(|w| WindowView {
                    id: &w.id,
                    title: &w.title,
                    z_order: w.z_order,
                    position: w.position,
                    size: w.size,
                })
                .collect(),
            topmost: self.windows.topmost(),
        }
    }
}

/// Renderable view of the desktop: visible windows back to front
#[derive(Debug, Serialize)]
pub struct DesktopSnapshot<'a> {
    /// Visible windows sorted by z-order, back to front
    pub windows: Vec<WindowView<'a>>,
    /// Most recently focused window, if any
    pub topmost: Option<&'a str>,
}

/// Per-window slice of the snapshot
#[derive(Debug, Serialize)]
pub struct WindowView<'a> {
    /// Window and app id
    pub id: &'a str,
    /// Title bar text
    pub title: &'a str,
    /// Stacking position
    pub z_order: u32,
    /// Top-left corner; `None` leaves placement to the shell
    pub position: Option<Vec2>,
    /// Window dimensions
    pub size: Size,
}

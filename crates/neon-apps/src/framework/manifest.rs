//! Application manifest
//!
//! Declares application identity and default window geometry.

/// Application manifest declaring identity and window defaults
#[derive(Clone, Debug)]
pub struct AppManifest {
    /// Unique identifier, also used as the window id
    /// Example: "calculator"
    pub id: &'static str,

    /// Human-readable name, used as the window title
    /// Example: "Calculator"
    pub name: &'static str,

    /// Semantic version
    /// Example: "1.0.0"
    pub version: &'static str,

    /// Brief description
    pub description: &'static str,

    /// Default window width in pixels
    pub default_width: f32,

    /// Default window height in pixels
    pub default_height: f32,
}

impl AppManifest {
    /// Get the app's unique ID
    pub fn id(&self) -> &str {
        self.id
    }

    /// Get the app's display name
    pub fn name(&self) -> &str {
        self.name
    }
}

// ============================================================================
// Built-in App Manifests
// ============================================================================

/// Calculator app manifest
pub static CALCULATOR_MANIFEST: AppManifest = AppManifest {
    id: "calculator",
    name: "Calculator",
    version: "1.0.0",
    description: "Expression calculator with result history",
    default_width: 280.0,
    default_height: 380.0,
};

/// Task board app manifest
pub static TASKS_MANIFEST: AppManifest = AppManifest {
    id: "tasks",
    name: "Tasks",
    version: "1.0.0",
    description: "Kanban task board with three columns",
    default_width: 520.0,
    default_height: 420.0,
};

/// Text editor app manifest
pub static EDITOR_MANIFEST: AppManifest = AppManifest {
    id: "editor",
    name: "Editor",
    version: "1.0.0",
    description: "Plain-text editor with autosave and word counts",
    default_width: 480.0,
    default_height: 360.0,
};

/// Users app manifest
pub static USERS_MANIFEST: AppManifest = AppManifest {
    id: "users",
    name: "Users",
    version: "1.0.0",
    description: "User accounts, login, and registration panel",
    default_width: 400.0,
    default_height: 440.0,
};

/// Automation runner app manifest
pub static AUTOMATION_MANIFEST: AppManifest = AppManifest {
    id: "automation",
    name: "Automation",
    version: "1.0.0",
    description: "Fixed-step pipeline runner with progress",
    default_width: 340.0,
    default_height: 300.0,
};

/// Music player app manifest
pub static MUSIC_MANIFEST: AppManifest = AppManifest {
    id: "music",
    name: "Music",
    version: "1.0.0",
    description: "Music player mock with a static playlist",
    default_width: 320.0,
    default_height: 220.0,
};

/// Currency converter app manifest
pub static CURRENCY_MANIFEST: AppManifest = AppManifest {
    id: "currency",
    name: "Currency",
    version: "1.0.0",
    description: "Currency converter with cached exchange rates",
    default_width: 320.0,
    default_height: 300.0,
};

/// Clock app manifest
pub static CLOCK_MANIFEST: AppManifest = AppManifest {
    id: "clock",
    name: "Clock",
    version: "1.0.0",
    description: "Wall-clock time display",
    default_width: 220.0,
    default_height: 140.0,
};

/// Resources panel app manifest
pub static RESOURCES_MANIFEST: AppManifest = AppManifest {
    id: "resources",
    name: "Resources",
    version: "1.0.0",
    description: "Resource toggle panel, at most two enabled",
    default_width: 300.0,
    default_height: 220.0,
};

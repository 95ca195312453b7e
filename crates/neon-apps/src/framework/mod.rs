//! Application framework
//!
//! Defines the interface that all Neon applications implement, the static
//! manifests declaring each app's identity, and the registry that routes
//! input events to app instances.

mod app;
mod error;
mod manifest;
mod registry;

pub use app::{AppContext, NeonApp};
pub use error::AppError;
pub use manifest::{
    AppManifest, AUTOMATION_MANIFEST, CALCULATOR_MANIFEST, CLOCK_MANIFEST, CURRENCY_MANIFEST,
    EDITOR_MANIFEST, MUSIC_MANIFEST, RESOURCES_MANIFEST, TASKS_MANIFEST, USERS_MANIFEST,
};
pub use registry::AppRegistry;

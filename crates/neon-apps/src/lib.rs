//! Neon Desktop application framework
//!
//! Provides the `NeonApp` trait, app manifests, the app registry, and the
//! built-in applications hosted by desktop windows. Apps are plain state
//! machines: the shell renders from `state_json()` and feeds user input
//! back as named button and text events.

pub mod apps;
pub mod framework;
pub mod storage;

pub use framework::{AppContext, AppError, AppManifest, AppRegistry, NeonApp};
pub use storage::{MemoryStorage, Storage};

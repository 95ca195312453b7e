//! Window Manager for Neon Desktop
//!
//! This crate provides the core desktop environment functionality:
//! - Window management (open, close, focus, z-order)
//! - Input routing and the window drag state machine
//! - The desktop engine tying windows to the application registry
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`math`]: Core geometry types (`Vec2`, `Size`)
//! - [`window`]: Window state, regions, and the manager
//! - [`input`]: Input routing and drag state machine
//! - [`engine`]: Desktop engine orchestrating windows, input, and apps
//!
//! ## Example
//!
//! ```rust
//! use neon_desktop::{DesktopEngine, Vec2, WindowRegion};
//!
//! let mut engine = DesktopEngine::new();
//! engine.init(0).unwrap();
//!
//! engine.open_window("calculator");
//! engine.pointer_down(
//!     "calculator",
//!     WindowRegion::Header,
//!     Vec2::new(150.0, 80.0),
//!     Vec2::new(100.0, 50.0),
//! );
//! engine.pointer_move(Vec2::new(160.0, 90.0));
//! engine.pointer_up();
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is pure Rust, testable without browser
//! 2. **DOM Rendering Stays Outside**: The engine holds window geometry and app
//!    state; the shell renders it with ordinary DOM nodes
//! 3. **Minimal Dependencies**: Core types have no browser dependencies

pub mod engine;
pub mod input;
pub mod math;
#[cfg(feature = "wasm")]
pub mod storage;
pub mod window;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

pub use engine::{DesktopEngine, DesktopSnapshot};
pub use input::{DragState, InputResult, InputRouter};
pub use math::{Size, Vec2};
pub use window::{Window, WindowManager, WindowRegion, BASE_Z_ORDER};

//! Core geometry types
//!
//! Minimal 2D math used by window placement and drag handling.

mod size;
mod vec2;

pub use size::Size;
pub use vec2::Vec2;

//! Window state

use serde::Serialize;

use super::manager::BASE_Z_ORDER;
use crate::math::{Size, Vec2};

/// A single window
#[derive(Clone, Debug, Serialize)]
pub struct Window {
    /// Stable identifier, shared with the owning app
    pub id: String,
    /// Title bar text
    pub title: String,
    /// Whether the window is currently shown
    pub visible: bool,
    /// Stacking position; larger values render in front
    pub z_order: u32,
    /// Top-left corner. `None` until the user drags the window, which
    /// leaves placement to the shell's default layout.
    pub position: Option<Vec2>,
    /// Window dimensions
    pub size: Size,
}

impl Window {
    /// Create a hidden window at the base of the stacking order
    pub fn new(id: impl Into<String>, title: impl Into<String>, size: Size) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            visible: false,
            z_order: BASE_Z_ORDER,
            position: None,
            size,
        }
    }
}

//! Drag state for the window move gesture

use crate::math::Vec2;

/// An in-progress window move operation
#[derive(Clone, Debug)]
pub struct DragState {
    /// Window being moved
    pub window_id: String,
    /// Offset from window origin to cursor, captured at drag start
    pub offset: Vec2,
}

impl DragState {
    /// Create a drag state for a window
    pub fn new(window_id: impl Into<String>, offset: Vec2) -> Self {
        Self {
            window_id: window_id.into(),
            offset,
        }
    }

    /// Top-left corner the window should take for a pointer position
    #[inline]
    pub fn window_origin_for(&self, pointer: Vec2) -> Vec2 {
        pointer - self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_state_fields() {
        let state = DragState::new("calculator", Vec2::new(50.0, 30.0));
        assert_eq!(state.window_id, "calculator");
        assert!((state.offset.x - 50.0).abs() < 0.001);
        assert!((state.offset.y - 30.0).abs() < 0.001);
    }

    #[test]
    fn test_window_origin_tracks_pointer() {
        let state = DragState::new("tasks", Vec2::new(50.0, 30.0));

        let origin = state.window_origin_for(Vec2::new(160.0, 90.0));
        assert!((origin.x - 110.0).abs() < 0.001);
        assert!((origin.y - 60.0).abs() < 0.001);
    }
}

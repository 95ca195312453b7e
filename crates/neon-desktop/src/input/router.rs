//! Input router state machine

use super::DragState;
use crate::math::Vec2;

/// Input router managing the drag state machine.
///
/// The router is either idle (`drag` is `None`) or tracking exactly one
/// window move; a new gesture replaces any previous one, so at most one
/// window can be dragged at a time.
pub struct InputRouter {
    /// Current drag state
    drag: Option<DragState>,
}

impl Default for InputRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl InputRouter {
    /// Create an idle input router
    pub fn new() -> Self {
        Self { drag: None }
    }

    /// Get the current drag state
    #[inline]
    pub fn drag(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    /// Check if a drag is in progress
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Start a window move operation
    pub fn start_window_move(&mut self, window_id: impl Into<String>, offset: Vec2) {
        self.drag = Some(DragState::new(window_id, offset));
    }

    /// End the current drag operation
    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    /// Cancel the current drag operation (alias for end_drag)
    #[inline]
    pub fn cancel(&mut self) {
        self.end_drag();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_starts_idle() {
        let router = InputRouter::new();
        assert!(!router.is_dragging());
        assert!(router.drag().is_none());
    }

    #[test]
    fn test_start_and_end_drag() {
        let mut router = InputRouter::new();

        router.start_window_move("editor", Vec2::new(10.0, 20.0));
        assert!(router.is_dragging());
        assert_eq!(router.drag().unwrap().window_id, "editor");

        router.end_drag();
        assert!(!router.is_dragging());
    }

    #[test]
    fn test_new_gesture_replaces_previous() {
        let mut router = InputRouter::new();

        router.start_window_move("editor", Vec2::new(10.0, 20.0));
        router.start_window_move("music", Vec2::new(5.0, 5.0));

        assert_eq!(router.drag().unwrap().window_id, "music");
    }

    #[test]
    fn test_cancel() {
        let mut router = InputRouter::new();
        router.start_window_move("clock", Vec2::ZERO);

        router.cancel();
        assert!(!router.is_dragging());
    }
}

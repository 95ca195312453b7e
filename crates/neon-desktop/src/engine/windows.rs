//! Window lifecycle operations

use super::DesktopEngine;

impl DesktopEngine {
    /// Show a window and bring it to the front
    pub fn open_window(&mut self, id: &str) {
        self.windows.open(id);
    }

    /// Hide a window.
    ///
    /// Closing the window currently being dragged also cancels the drag,
    /// so a stale gesture cannot move a hidden window.
    pub fn close_window(&mut self, id: &str) {
        if self.input.drag().is_some_and(|d| d.window_id == id) {
            self.input.cancel();
        }
        self.windows.close(id);
    }

    /// Bring a window to the front
    pub fn focus_window(&mut self, id: &str) {
        self.windows.focus(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec2;
    use crate::window::WindowRegion;

    #[test]
    fn test_open_close_window() {
        let mut engine = DesktopEngine::new();
        engine.init(0).unwrap();

        engine.open_window("music");
        assert!(engine.windows.get("music").unwrap().visible);
        assert_eq!(engine.windows.topmost(), Some("music"));

        engine.close_window("music");
        assert!(!engine.windows.get("music").unwrap().visible);
        assert_eq!(engine.windows.topmost(), None);
    }

    #[test]
    fn test_focus_assigns_increasing_z() {
        let mut engine = DesktopEngine::new();
        engine.init(0).unwrap();

        engine.open_window("editor");
        engine.open_window("music");
        engine.focus_window("editor");

        assert_eq!(engine.windows.get("editor").unwrap().z_order, 103);
        assert_eq!(engine.windows.get("music").unwrap().z_order, 102);
    }

    #[test]
    fn test_closing_dragged_window_cancels_drag() {
        let mut engine = DesktopEngine::new();
        engine.init(0).unwrap();
        engine.open_window("editor");

        engine.pointer_down(
            "editor",
            WindowRegion::Header,
            Vec2::new(50.0, 20.0),
            Vec2::ZERO,
        );
        assert!(engine.input.is_dragging());

        engine.close_window("editor");
        assert!(!engine.input.is_dragging());
    }

    #[test]
    fn test_closing_other_window_keeps_drag() {
        let mut engine = DesktopEngine::new();
        engine.init(0).unwrap();
        engine.open_window("editor");
        engine.open_window("music");

        engine.pointer_down(
            "editor",
            WindowRegion::Header,
            Vec2::new(50.0, 20.0),
            Vec2::ZERO,
        );
        engine.close_window("music");

        assert!(engine.input.is_dragging());
    }
}

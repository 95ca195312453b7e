//! Pointer event handling and the window drag gesture

use super::DesktopEngine;
use crate::input::InputResult;
use crate::math::Vec2;
use crate::window::WindowRegion;

impl DesktopEngine {
    /// Handle pointer down on a window region.
    ///
    /// `pointer` is the event position and `window_origin` the window's
    /// rendered top-left corner, both in shell coordinates. The shell
    /// supplies the origin because windows the user never dragged have
    /// no stored position; their placement lives in the shell's layout.
    pub fn pointer_down(
        &mut self,
        id: &str,
        region: WindowRegion,
        pointer: Vec2,
        window_origin: Vec2,
    ) -> InputResult {
        if self.windows.get(id).is_none() {
            return InputResult::Unhandled;
        }

        match region {
            WindowRegion::Header => {
                self.focus_window(id);
                self.input.start_window_move(id, pointer - window_origin);
                InputResult::Handled
            }
            WindowRegion::CloseButton => {
                self.close_window(id);
                InputResult::Handled
            }
            WindowRegion::Content => {
                // Raise the window but let the event reach the app's controls
                self.focus_window(id);
                InputResult::Unhandled
            }
        }
    }

    /// Handle pointer move.
    ///
    /// While a drag is active the window follows the pointer, keeping the
    /// grab offset captured at drag start.
    pub fn pointer_move(&mut self, pointer: Vec2) -> InputResult {
        let (window_id, origin) = match self.input.drag() {
            Some(drag) => (drag.window_id.clone(), drag.window_origin_for(pointer)),
            None => return InputResult::Unhandled,
        };

        self.windows.set_position(&window_id, origin);
        InputResult::Handled
    }

    /// Handle pointer up, ending any active drag
    pub fn pointer_up(&mut self) -> InputResult {
        if self.input.is_dragging() {
            self.input.end_drag();
            return InputResult::Handled;
        }
        InputResult::Unhandled
    }
}

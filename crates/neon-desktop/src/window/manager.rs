//! Window manager for lifecycle, focus, and z-order

use std::collections::HashMap;

use super::Window;
use crate::math::Vec2;

/// Z-order every window starts at; focusing assigns values above it
pub const BASE_Z_ORDER: u32 = 100;

/// Window manager handling visibility, z-order, and focus
pub struct WindowManager {
    /// All windows by ID
    windows: HashMap<String, Window>,
    /// Highest z-order handed out so far
    max_z: u32,
    /// Most recently focused window, if any
    topmost: Option<String>,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowManager {
    /// Create a new window manager
    pub fn new() -> Self {
        Self {
            windows: HashMap::new(),
            max_z: BASE_Z_ORDER,
            topmost: None,
        }
    }

    /// Register a window. The id must be unique; a duplicate replaces
    /// the earlier registration.
    pub fn register(&mut self, window: Window) {
        self.windows.insert(window.id.clone(), window);
    }

    /// Show a window and bring it to the front. Unknown ids are ignored.
    pub fn open(&mut self, id: &str) {
        match self.windows.get_mut(id) {
            Some(window) => window.visible = true,
            None => return,
        }
        self.focus(id);
    }

    /// Hide a window. Hiding the topmost window leaves no window topmost
    /// until the next focus. Unknown ids are ignored.
    pub fn close(&mut self, id: &str) {
        if let Some(window) = self.windows.get_mut(id) {
            window.visible = false;
            if self.topmost.as_deref() == Some(id) {
                self.topmost = None;
            }
        }
    }

    /// Bring a window to the front. Each focus assigns a strictly higher
    /// z-order than any assigned before. Unknown ids are ignored.
    pub fn focus(&mut self, id: &str) {
        if let Some(window) = self.windows.get_mut(id) {
            self.max_z += 1;
            window.z_order = self.max_z;
            self.topmost = Some(id.to_string());
        }
    }

    /// Move a window to a new position. Unknown ids are ignored.
    pub fn set_position(&mut self, id: &str, position: Vec2) {
        if let Some(window) = self.windows.get_mut(id) {
            window.position = Some(position);
        }
    }

    /// Get a window by ID
    pub fn get(&self, id: &str) -> Option<&Window> {
        self.windows.get(id)
    }

    /// The most recently focused window id
    pub fn topmost(&self) -> Option<&str> {
        self.topmost.as_deref()
    }

    /// Highest z-order assigned so far
    #[inline]
    pub fn max_z(&self) -> u32 {
        self.max_z
    }

    /// Get visible windows sorted by z-order (back to front)
    pub fn windows_by_z(&self) -> Vec<&Window> {
        let mut windows: Vec<&Window> = self.windows.values().filter(|w| w.visible).collect();
        windows.sort_by_key(|w| w.z_order);
        windows
    }

    /// Get the number of registered windows
    pub fn count(&self) -> usize {
        self.windows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Size;

    fn manager_with(ids: &[&str]) -> WindowManager {
        let mut wm = WindowManager::new();
        for id in ids {
            wm.register(Window::new(*id, *id, Size::new(400.0, 300.0)));
        }
        wm
    }

    #[test]
    fn test_open_assigns_increasing_z() {
        let mut wm = manager_with(&["w1", "w2"]);

        wm.open("w1");
        assert_eq!(wm.get("w1").unwrap().z_order, 101);
        assert_eq!(wm.topmost(), Some("w1"));

        wm.open("w2");
        assert_eq!(wm.get("w2").unwrap().z_order, 102);
        assert_eq!(wm.topmost(), Some("w2"));

        wm.focus("w1");
        assert_eq!(wm.get("w1").unwrap().z_order, 103);
        assert_eq!(wm.topmost(), Some("w1"));
    }

    #[test]
    fn test_z_orders_never_reused() {
        let mut wm = manager_with(&["w1", "w2"]);

        wm.open("w1");
        wm.open("w2");
        wm.close("w2");
        wm.open("w2");

        // Reopening continues above the old maximum
        assert_eq!(wm.get("w2").unwrap().z_order, 103);
    }

    #[test]
    fn test_close_topmost_clears_topmost() {
        let mut wm = manager_with(&["w1", "w2"]);

        wm.open("w1");
        wm.open("w2");
        wm.close("w2");

        assert_eq!(wm.topmost(), None);
        // w1 keeps its z-order but is not promoted
        assert_eq!(wm.get("w1").unwrap().z_order, 101);
    }

    #[test]
    fn test_close_background_window_keeps_topmost() {
        let mut wm = manager_with(&["w1", "w2"]);

        wm.open("w1");
        wm.open("w2");
        wm.close("w1");

        assert_eq!(wm.topmost(), Some("w2"));
    }

    #[test]
    fn test_close_hides_but_preserves_state() {
        let mut wm = manager_with(&["w1"]);

        wm.open("w1");
        wm.set_position("w1", Vec2::new(40.0, 60.0));
        wm.close("w1");

        let window = wm.get("w1").unwrap();
        assert!(!window.visible);
        assert_eq!(window.position, Some(Vec2::new(40.0, 60.0)));
        assert_eq!(wm.count(), 1);
    }

    #[test]
    fn test_unknown_ids_ignored() {
        let mut wm = manager_with(&["w1"]);

        wm.open("nope");
        wm.close("nope");
        wm.focus("nope");
        wm.set_position("nope", Vec2::ZERO);

        assert_eq!(wm.topmost(), None);
        assert_eq!(wm.max_z(), BASE_Z_ORDER);
    }

    #[test]
    fn test_windows_by_z_visible_only() {
        let mut wm = manager_with(&["w1", "w2", "w3"]);

        wm.open("w3");
        wm.open("w1");
        wm.open("w2");
        wm.close("w1");

        let ids: Vec<&str> = wm.windows_by_z().iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["w3", "w2"]);
    }
}

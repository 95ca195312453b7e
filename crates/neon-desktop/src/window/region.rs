//! Window regions for pointer dispatch

/// Region of a window a pointer event landed in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowRegion {
    /// Title bar; dragging here moves the window
    Header,
    /// Window body; events pass through to the app's controls
    Content,
    /// Close button in the title bar
    CloseButton,
}

impl WindowRegion {
    /// Parse a region name from the shell
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "header" => Some(WindowRegion::Header),
            "content" => Some(WindowRegion::Content),
            "close" => Some(WindowRegion::CloseButton),
            _ => None,
        }
    }

    /// CSS cursor to show over this region
    pub fn cursor(&self) -> &'static str {
        match self {
            WindowRegion::Header => "move",
            WindowRegion::Content => "default",
            WindowRegion::CloseButton => "pointer",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(WindowRegion::parse("header"), Some(WindowRegion::Header));
        assert_eq!(WindowRegion::parse("content"), Some(WindowRegion::Content));
        assert_eq!(WindowRegion::parse("close"), Some(WindowRegion::CloseButton));
        assert_eq!(WindowRegion::parse("titlebar"), None);
    }

    #[test]
    fn test_cursor() {
        assert_eq!(WindowRegion::Header.cursor(), "move");
        assert_eq!(WindowRegion::CloseButton.cursor(), "pointer");
    }
}

//! UI area positioning for mouse event handling
//!
//! Central place for the vertical offsets of the screen regions, so the
//! renderer and the mouse handler agree on where things are.

/// Height of the header bar (with borders: top + content + bottom)
pub const HEADER_HEIGHT: u16 = 3;

/// Row of the header that carries the nav labels
pub const NAV_ROW: u16 = 1;

/// UI area for calculating mouse Y offset
///
/// # Layout
///
/// ```text
/// Row 0-2:  Header bar (logo + nav labels on row 1)
/// Row 3+:   Page content (dropdown overlays the top of it)
/// Bottom:   Status bar (1 row)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiArea {
    /// Header bar itself (rows 0-2)
    Header,
    /// Page content (starts after header)
    Content,
    /// Form fields (starts after header + border)
    FormContent,
}

impl UiArea {
    /// Get the starting Y row for this UI area (absolute screen position)
    #[inline]
    pub const fn start_y(self) -> u16 {
        match self {
            UiArea::Header => 0,
            UiArea::Content => HEADER_HEIGHT,
            UiArea::FormContent => HEADER_HEIGHT + 1, // +1 for border
        }
    }

    /// Convert absolute mouse row to row relative to this UI area
    #[inline]
    pub fn relative_row(self, mouse_row: u16) -> u16 {
        mouse_row.saturating_sub(self.start_y())
    }

    /// Check if a mouse row is within this UI area (at or after start)
    #[inline]
    pub fn contains_row(self, mouse_row: u16) -> bool {
        match self {
            UiArea::Header => mouse_row < HEADER_HEIGHT,
            _ => mouse_row >= self.start_y(),
        }
    }
}

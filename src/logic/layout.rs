//! Layout calculation logic
//!
//! Pure functions for screen geometry: where the menu panel lives relative
//! to the header, and how tall cards are after a resize.

use ratatui::layout::Rect;

/// Height of the header bar (toggles + border), in rows
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the bottom status bar, in rows
pub const STATUS_HEIGHT: u16 = 1;

/// Computed screen regions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutInfo {
    /// Header bar at the top (the reference element for card heights)
    pub header_area: Rect,
    /// Page body between header and status bar
    pub body_area: Rect,
    /// Bottom status bar
    pub status_area: Rect,
}

/// Split the terminal into header, body, and status regions
pub fn calculate_layout(size: Rect) -> LayoutInfo {
    let header_area = Rect {
        height: HEADER_HEIGHT.min(size.height),
        ..size
    };
    let status_y = size.height.saturating_sub(STATUS_HEIGHT);
    let status_area = Rect {
        y: size.y + status_y,
        height: size.height - status_y,
        ..size
    };
    let body_area = Rect {
        y: size.y + header_area.height,
        height: size
            .height
            .saturating_sub(header_area.height + status_area.height),
        ..size
    };
    LayoutInfo {
        header_area,
        body_area,
        status_area,
    }
}

/// Card height relative to the header's lower edge.
///
/// The menu fills the remaining viewport height below the header; resizing
/// recomputes this without touching open/closed state.
///
/// # Arguments
/// * `viewport_height` - Total terminal height in rows
/// * `header_bottom` - Row just below the header bar
pub fn card_height(viewport_height: u16, header_bottom: u16) -> u16 {
    viewport_height
        .saturating_sub(header_bottom)
        .saturating_sub(STATUS_HEIGHT)
}

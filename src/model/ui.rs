//! UI Model
//!
//! This sub-model contains the menu's visual state: the open/close phase
//! with its animation progress, load tracking, viewport geometry, and the
//! warning surfaced when attachment degrades.

use crate::MenuPhase;

/// Menu-level visual state
#[derive(Clone, Debug, PartialEq)]
pub struct UiModel {
    /// Current open/close phase
    pub phase: MenuPhase,

    /// Progress of the running open/close animation in [0, 1]
    pub phase_progress: f32,

    /// Whether the card arena has been built (build is one-shot)
    pub loaded: bool,

    /// Terminal size (width, height) in cells
    pub viewport: (u16, u16),

    /// Card height below the header, recomputed on resize
    pub card_height: u16,

    /// Degradation warning (missing toggle/container); shown once in the
    /// status line
    pub warning: Option<String>,

    /// Link of the most recently activated leaf entry
    pub last_activated_link: Option<String>,
}

impl UiModel {
    /// Create initial UI state for a closed, unloaded menu
    pub fn new() -> Self {
        Self {
            phase: MenuPhase::Closed,
            phase_progress: 0.0,
            loaded: false,
            viewport: (0, 0),
            card_height: 0,
            warning: None,
            last_activated_link: None,
        }
    }

    /// Whether the menu is anywhere in its open lifecycle
    pub fn is_visible(&self) -> bool {
        self.phase != MenuPhase::Closed
    }
}

impl Default for UiModel {
    fn default() -> Self {
        Self::new()
    }
}

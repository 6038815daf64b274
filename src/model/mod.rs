//! Pure Menu Model
//!
//! This module defines the pure, cloneable state for one slide menu.
//! The Model is organized into focused sub-models for maintainability:
//!
//! - **CardArena**: The built card tree (flat storage, index references)
//! - **NavigationModel**: Open card, active path, transition, focus
//! - **UiModel**: Phase, animation progress, viewport, warnings
//!
//! Key principles:
//! - Clone + Debug + PartialEq: Can snapshot and compare state
//! - No I/O: the terminal and the page live outside the model
//! - Pure accessors: Helper methods are side-effect free

pub mod cards;
pub mod navigation;
pub mod ui;

pub use cards::{Card, CardArena, CardEntry, CardId};
pub use navigation::{CardTransition, NavigationModel, TransitionKind};
pub use ui::UiModel;

/// Root menu model composed of focused sub-models
#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    /// Built card tree (empty until load)
    pub cards: CardArena,

    /// Navigation state (open card, active path, focus)
    pub navigation: NavigationModel,

    /// Phase and visual state
    pub ui: UiModel,
}

impl Model {
    /// Create initial model: closed, unloaded, pointing at the root card
    pub fn new() -> Self {
        Self {
            cards: CardArena::new(),
            navigation: NavigationModel::new(),
            ui: UiModel::new(),
        }
    }

    /// Get the currently open card (if the arena is built)
    pub fn open_card(&self) -> Option<&Card> {
        self.cards.get(self.navigation.open_card)
    }

    /// Get the focused entry of the open card (if any)
    pub fn focused_entry(&self) -> Option<&CardEntry> {
        let card = self.open_card()?;
        card.entries.get(self.navigation.focus?)
    }

    /// Whether an entry participates in the tab order.
    ///
    /// Only the open card's entries are focusable, and only while the menu
    /// is somewhere in its open lifecycle; everything else is excluded
    /// from tabbing.
    pub fn is_focusable(&self, card: CardId, entry_idx: usize) -> bool {
        self.ui.is_visible()
            && crate::logic::focus::is_focusable(self.navigation.open_card, card, entry_idx)
    }

    /// Whether a drill-down entry reads as expanded: true only for the
    /// entry whose child card is currently open
    pub fn entry_expanded(&self, card: CardId, entry_idx: usize) -> bool {
        self.cards
            .get(card)
            .and_then(|c| c.entries.get(entry_idx))
            .and_then(|entry| entry.child)
            .map(|child| child == self.navigation.open_card)
            .unwrap_or(false)
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

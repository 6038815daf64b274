//! Navigation Model
//!
//! This sub-model contains all state related to card navigation: the open
//! card, the pre-computed active card path, the in-flight slide transition,
//! and the focus position inside the open card.

use super::cards::CardId;

/// Direction of a card slide
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionKind {
    /// A child card slides in from the right edge
    Next,
    /// The open card slides out to the right edge
    Previous,
}

/// An in-flight card slide
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardTransition {
    pub kind: TransitionKind,
    /// The moving card: the entering child for `Next`, the exiting card
    /// for `Previous`
    pub card: CardId,
    /// Animation progress in [0, 1]
    pub progress: f32,
}

/// Navigation state (open card, active path, focus)
#[derive(Clone, Debug, PartialEq)]
pub struct NavigationModel {
    /// The single visible card; owned exclusively by the controller
    pub open_card: CardId,

    /// Ancestor cards leading to the initially active leaf
    pub active_card_path: Vec<CardId>,

    /// Running slide, if any; one slide at a time
    pub transition: Option<CardTransition>,

    /// Focused entry index in the open card; `None` while focus is still
    /// on the toggle
    pub focus: Option<usize>,
}

impl NavigationModel {
    /// Create initial navigation state pointing at the root card
    pub fn new() -> Self {
        Self {
            open_card: CardId::ROOT,
            active_card_path: Vec::new(),
            transition: None,
            focus: None,
        }
    }

    /// Whether a card slide is currently running
    pub fn in_transition(&self) -> bool {
        self.transition.is_some()
    }

    /// Reset for a fresh open: land on `start`, drop any stale slide and
    /// focus
    pub fn reset_for_open(&mut self, start: CardId) {
        self.open_card = start;
        self.transition = None;
        self.focus = None;
    }
}

impl Default for NavigationModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_model_creation() {
        let model = NavigationModel::new();
        assert_eq!(model.open_card, CardId::ROOT);
        assert!(model.active_card_path.is_empty());
        assert!(!model.in_transition());
        assert!(model.focus.is_none());
    }

    #[test]
    fn test_reset_for_open_clears_transition_and_focus() {
        let mut model = NavigationModel::new();
        model.focus = Some(2);
        model.transition = Some(CardTransition {
            kind: TransitionKind::Next,
            card: CardId(3),
            progress: 0.4,
        });

        model.reset_for_open(CardId(1));
        assert_eq!(model.open_card, CardId(1));
        assert!(model.transition.is_none());
        assert!(model.focus.is_none());
    }
}

//! Focus logic
//!
//! Pure functions for the menu's focus trap: moving focus through the open
//! card's entries with wrapping behavior, and deciding which entries are
//! focusable at all. While the menu is open, only the open card's entries
//! participate in the tab order; everything else is excluded, so focus can
//! never escape into the underlying page.

use crate::model::cards::{CardArena, CardId};

/// Calculate the next focus index with wrapping
///
/// Advances focus to the next entry. If at the end, wraps around to the
/// beginning. If nothing is focused yet, focuses the first entry.
///
/// # Arguments
/// * `current` - Current focus index (None if focus is still on the toggle)
/// * `len` - Number of focusable entries in the open card
///
/// # Returns
/// * `Some(index)` - The next focus index
/// * `None` - If the card has no entries
pub fn next_focus(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }

    Some(match current {
        Some(i) if i >= len - 1 => 0, // Wrap to start
        Some(i) => i + 1,
        None => 0,
    })
}

/// Calculate the previous focus index with wrapping
///
/// Moves focus to the previous entry. If at the beginning, wraps around to
/// the end. If nothing is focused yet, focuses the last entry.
pub fn prev_focus(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }

    Some(match current {
        Some(0) | None => len - 1, // Wrap to end
        Some(i) => i - 1,
    })
}

/// Whether an entry is focusable given the currently open card.
///
/// Open-card membership is what makes an entry visible in the slid-in
/// panel, so it is also what admits it to the tab order.
pub fn is_focusable(open_card: CardId, card: CardId, _entry_idx: usize) -> bool {
    card == open_card
}

/// Number of focusable entries while `open_card` is the visible card
pub fn focusable_len(arena: &CardArena, open_card: CardId) -> usize {
    arena
        .get(open_card)
        .map(|card| card.entries.len())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_focus_empty_card() {
        assert_eq!(next_focus(None, 0), None);
        assert_eq!(next_focus(Some(2), 0), None);
    }

    #[test]
    fn test_next_focus_from_toggle() {
        // Focus entering the card lands on the first entry
        assert_eq!(next_focus(None, 3), Some(0));
    }

    #[test]
    fn test_next_focus_progression_and_wrap() {
        assert_eq!(next_focus(Some(0), 3), Some(1));
        assert_eq!(next_focus(Some(1), 3), Some(2));
        assert_eq!(next_focus(Some(2), 3), Some(0)); // trap wraps
    }

    #[test]
    fn test_prev_focus_empty_card() {
        assert_eq!(prev_focus(None, 0), None);
    }

    #[test]
    fn test_prev_focus_progression_and_wrap() {
        assert_eq!(prev_focus(Some(2), 3), Some(1));
        assert_eq!(prev_focus(Some(1), 3), Some(0));
        assert_eq!(prev_focus(Some(0), 3), Some(2)); // trap wraps backwards
        assert_eq!(prev_focus(None, 3), Some(2));
    }

    #[test]
    fn test_focus_single_entry() {
        assert_eq!(next_focus(Some(0), 1), Some(0));
        assert_eq!(prev_focus(Some(0), 1), Some(0));
    }

    #[test]
    fn test_is_focusable_only_in_open_card() {
        let open = CardId(1);
        assert!(is_focusable(open, CardId(1), 0));
        assert!(!is_focusable(open, CardId(0), 0));
        assert!(!is_focusable(open, CardId(2), 5));
    }
}

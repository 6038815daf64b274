//! State class derivation
//!
//! The menu root, cards, and entries each carry a set of named state
//! classes (names come from configuration) that the renderer styles by.
//! Classes are derived from state on demand, never stored, so a stale
//! combination cannot survive a transition.

use crate::config::ClassNames;
use crate::logic::scroll::ScrollLock;
use crate::model::cards::{Card, CardEntry, CardId};
use crate::MenuPhase;

/// Classes on the menu root for the given phase.
///
/// `Closing` keeps the `open` class alongside `closing` so the menu stays
/// visible while sliding out; both drop together at `Closed`.
pub fn root_classes(phase: MenuPhase, names: &ClassNames) -> Vec<String> {
    match phase {
        MenuPhase::Closed => vec![],
        MenuPhase::Opening => vec![names.opening.clone()],
        MenuPhase::Open => vec![names.open.clone()],
        MenuPhase::Closing => vec![names.open.clone(), names.closing.clone()],
    }
}

/// Classes on a single card
pub fn card_classes(
    card: &Card,
    open_card: CardId,
    active_path: &[CardId],
    names: &ClassNames,
) -> Vec<String> {
    let mut classes = Vec::new();
    if card.id == open_card {
        classes.push(names.show.clone());
    }
    if active_path.contains(&card.id) {
        classes.push(names.active.clone());
    }
    classes
}

/// Classes on a single card entry
pub fn entry_classes(entry: &CardEntry, names: &ClassNames) -> Vec<String> {
    let mut classes = Vec::new();
    if entry.is_active {
        classes.push(names.active.clone());
    }
    if entry.is_current {
        classes.push(names.current.clone());
    }
    if entry.has_children() {
        classes.push(names.has_children.clone());
    }
    classes
}

/// Extra class on the page while scroll-locked with overflowing content
pub fn page_lock_classes(lock: Option<&ScrollLock>, names: &ClassNames) -> Vec<String> {
    match lock {
        Some(lock) if lock.scrollable => vec![names.locked_scrollable.clone()],
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::scroll;

    fn names() -> ClassNames {
        ClassNames::default()
    }

    #[test]
    fn test_root_classes_per_phase() {
        let n = names();
        assert!(root_classes(MenuPhase::Closed, &n).is_empty());
        assert_eq!(root_classes(MenuPhase::Opening, &n), vec!["opening"]);
        assert_eq!(root_classes(MenuPhase::Open, &n), vec!["open"]);
        assert_eq!(root_classes(MenuPhase::Closing, &n), vec!["open", "closing"]);
    }

    #[test]
    fn test_card_classes_show_and_active() {
        let n = names();
        let card = Card {
            id: CardId(1),
            item_id: Some(7),
            title: "Products".to_string(),
            parent: Some(CardId::ROOT),
            children: vec![],
            entries: vec![],
        };
        let classes = card_classes(&card, CardId(1), &[CardId::ROOT, CardId(1)], &n);
        assert_eq!(classes, vec!["show", "active"]);

        let classes = card_classes(&card, CardId::ROOT, &[], &n);
        assert!(classes.is_empty());
    }

    #[test]
    fn test_entry_classes() {
        let n = names();
        let entry = CardEntry {
            item_id: 1,
            title: "Widgets".to_string(),
            link: "/widgets".to_string(),
            target: None,
            is_active: true,
            is_current: true,
            child: Some(CardId(2)),
        };
        assert_eq!(
            entry_classes(&entry, &n),
            vec!["active", "current", "has-children"]
        );
    }

    #[test]
    fn test_page_lock_classes() {
        let n = names();
        assert!(page_lock_classes(None, &n).is_empty());
        let flat = scroll::capture(0, 20, 40);
        assert!(page_lock_classes(Some(&flat), &n).is_empty());
        let tall = scroll::capture(0, 80, 40);
        assert_eq!(page_lock_classes(Some(&tall), &n), vec!["locked-scrollable"]);
    }
}

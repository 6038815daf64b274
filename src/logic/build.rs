//! Card arena build
//!
//! One-shot, depth-first construction of the card arena from the menu item
//! tree. Build runs at most once per menu: either eagerly at attach time or
//! lazily on first open, and a second request is a no-op.
//!
//! Invariant: the arena holds exactly one entry per input item.

use crate::menu::MenuItem;
use crate::model::cards::{Card, CardArena, CardEntry, CardId};

/// Build the card arena from the root level of a menu tree.
///
/// The root card gets `menu_label` as its title and the top-level items as
/// its entries. Every item with children contributes one additional card,
/// wired to its parent card by arena index.
pub fn build_cards(items: &[MenuItem], menu_label: &str) -> CardArena {
    let mut arena = CardArena::new();
    let root = arena.push(Card {
        id: CardId::ROOT,
        item_id: None,
        title: menu_label.to_string(),
        parent: None,
        children: Vec::new(),
        entries: Vec::new(),
    });
    build_level(&mut arena, root, items);
    arena
}

fn build_level(arena: &mut CardArena, parent: CardId, items: &[MenuItem]) {
    for item in items {
        let child = if item.effective_has_children() {
            let card_id = arena.push(Card {
                id: CardId::ROOT, // overwritten by push
                item_id: Some(item.id),
                title: item.title.clone(),
                parent: Some(parent),
                children: Vec::new(),
                entries: Vec::new(),
            });
            build_level(arena, card_id, &item.children);
            if let Some(parent_card) = arena.get_mut(parent) {
                parent_card.children.push(card_id);
            }
            Some(card_id)
        } else {
            None
        };

        let entry = CardEntry {
            item_id: item.id,
            title: item.title.clone(),
            link: item.link.clone(),
            target: item.target.clone(),
            is_active: item.is_active,
            is_current: item.is_current,
            child,
        };
        if let Some(parent_card) = arena.get_mut(parent) {
            parent_card.entries.push(entry);
        }
    }
}

/// Map an active path of item ids onto the cards it traverses.
///
/// Only items that own a card (i.e. have children) appear in the result; the
/// root card is always the first element. A leaf at the end of the path
/// contributes no card of its own, so the deepest returned card is the one
/// whose entries contain the leaf.
pub fn card_path(arena: &CardArena, item_path: &[u64]) -> Vec<CardId> {
    let mut path = vec![CardId::ROOT];
    for item_id in item_path {
        if let Some(card_id) = arena.card_for_item(*item_id) {
            path.push(card_id);
        }
    }
    path
}

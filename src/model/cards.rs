//! Card arena
//!
//! Cards are the navigable levels of the slide menu: one card for the root
//! level and one for every menu item with children. Cards live in a flat
//! arena and reference each other by index, so ancestor lookups never walk
//! a render tree.

/// Index of a card in the arena. `CardId(0)` is the root card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardId(pub usize);

impl CardId {
    /// The root card of every arena
    pub const ROOT: CardId = CardId(0);
}

/// One rendered row of a card
#[derive(Debug, Clone, PartialEq)]
pub struct CardEntry {
    /// Id of the menu item this row renders
    pub item_id: u64,
    pub title: String,
    pub link: String,
    pub target: Option<String>,
    pub is_active: bool,
    pub is_current: bool,
    /// Child card opened by this row, if the item has children
    pub child: Option<CardId>,
}

impl CardEntry {
    pub fn has_children(&self) -> bool {
        self.child.is_some()
    }
}

/// One navigable level of the menu
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: CardId,
    /// Menu item that owns this card; `None` for the root card
    pub item_id: Option<u64>,
    /// Title shown while this card is open (root uses the menu label)
    pub title: String,
    /// Recorded parent card; `None` for the root card
    pub parent: Option<CardId>,
    pub children: Vec<CardId>,
    pub entries: Vec<CardEntry>,
}

/// Flat storage for the card tree
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardArena {
    cards: Vec<Card>,
}

impl CardArena {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Append a card and return its id
    pub fn push(&mut self, mut card: Card) -> CardId {
        let id = CardId(self.cards.len());
        card.id = id;
        self.cards.push(card);
        id
    }

    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.0)
    }

    pub fn get_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.get_mut(id.0)
    }

    pub fn root(&self) -> Option<&Card> {
        self.cards.first()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Total number of entries across all cards
    ///
    /// Build guarantees this equals the number of items in the input tree.
    pub fn entry_count(&self) -> usize {
        self.cards.iter().map(|card| card.entries.len()).sum()
    }

    /// Find the card owned by a menu item
    pub fn card_for_item(&self, item_id: u64) -> Option<CardId> {
        self.cards
            .iter()
            .find(|card| card.item_id == Some(item_id))
            .map(|card| card.id)
    }

    /// Recorded parent of a card, if any
    pub fn parent_of(&self, id: CardId) -> Option<CardId> {
        self.get(id).and_then(|card| card.parent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(title: &str, parent: Option<CardId>) -> Card {
        Card {
            id: CardId(0), // overwritten by push
            item_id: None,
            title: title.to_string(),
            parent,
            children: Vec::new(),
            entries: Vec::new(),
        }
    }

    #[test]
    fn test_push_assigns_sequential_ids() {
        let mut arena = CardArena::new();
        let a = arena.push(card("a", None));
        let b = arena.push(card("b", Some(a)));
        assert_eq!(a, CardId::ROOT);
        assert_eq!(b, CardId(1));
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn test_parent_of() {
        let mut arena = CardArena::new();
        let a = arena.push(card("a", None));
        let b = arena.push(card("b", Some(a)));
        assert_eq!(arena.parent_of(b), Some(a));
        assert_eq!(arena.parent_of(a), None);
    }

    #[test]
    fn test_empty_arena() {
        let arena = CardArena::new();
        assert!(arena.is_empty());
        assert!(arena.root().is_none());
        assert_eq!(arena.entry_count(), 0);
    }
}

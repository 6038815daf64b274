//! Tests for card arena build invariants
//!
//! The build step is one-shot: it must produce exactly one entry per input
//! item, and asking for it again must never duplicate content.

use slidemenu::config::Config;
use slidemenu::controller::MenuController;
use slidemenu::events::EventBus;
use slidemenu::logic::build::build_cards;
use slidemenu::logic::tree::count_items;
use slidemenu::menu::{parse_menu_items, MenuItem};
use slidemenu::page::Page;

fn demo_page() -> Page {
    let mut page = Page::new("Test");
    page.add_toggle("toggle", "menu", "Menu");
    page.add_container("menu");
    page.body = (0..30).map(|i| format!("line {}", i)).collect();
    page
}

fn wide_tree() -> Vec<MenuItem> {
    // 3 roots, one with two levels of children, 9 items total
    let json = r#"[
        {"id": 1, "title": "A", "children": [
            {"id": 2, "title": "A1", "children": [
                {"id": 3, "title": "A1a"},
                {"id": 4, "title": "A1b"}
            ]},
            {"id": 5, "title": "A2"}
        ]},
        {"id": 6, "title": "B", "children": [
            {"id": 7, "title": "B1"},
            {"id": 8, "title": "B2"}
        ]},
        {"id": 9, "title": "C"}
    ]"#;
    parse_menu_items(json).unwrap()
}

/// One entry per input item, across differently shaped trees
#[test]
fn test_entry_count_equals_item_count() {
    let flat: Vec<MenuItem> = (1..=5).map(|i| MenuItem::new(i, "item")).collect();
    let nested = wide_tree();

    for items in [Vec::new(), flat, nested] {
        let arena = build_cards(&items, "Main");
        assert_eq!(
            arena.entry_count(),
            count_items(&items),
            "entry count must match item count for tree of {} items",
            count_items(&items)
        );
    }
}

/// Deeply linear tree: every level becomes exactly one card
#[test]
fn test_linear_tree_card_per_level() {
    let mut leaf = MenuItem::new(4, "leaf");
    leaf.is_current = true;
    let mut l3 = MenuItem::new(3, "l3");
    l3.children.push(leaf);
    let mut l2 = MenuItem::new(2, "l2");
    l2.children.push(l3);
    let mut l1 = MenuItem::new(1, "l1");
    l1.children.push(l2);

    let arena = build_cards(&[l1], "Main");
    // Root + one card per item-with-children
    assert_eq!(arena.len(), 4);
    assert_eq!(arena.entry_count(), 4);
}

/// A second load request must not duplicate content
#[test]
fn test_load_is_idempotent() {
    let mut page = demo_page();
    let bus = EventBus::new();
    let mut controller =
        MenuController::attach(&page, "toggle", wide_tree(), Config::default(), &bus);
    controller.handle_resize(80, 24);

    // First open triggers the lazy build
    controller.open(&mut page);
    controller.tick(&mut page, 600);
    let entries_after_first = controller.model.cards.entry_count();
    let cards_after_first = controller.model.cards.len();

    // Close fully, then open again: build must not run twice
    controller.close(&mut page);
    controller.tick(&mut page, 600);
    controller.open(&mut page);
    controller.tick(&mut page, 600);

    assert_eq!(controller.model.cards.entry_count(), entries_after_first);
    assert_eq!(controller.model.cards.len(), cards_after_first);
}

/// Eager build followed by open: still exactly one build
#[test]
fn test_eager_build_then_open_does_not_rebuild() {
    let page = demo_page();
    let bus = EventBus::new();
    let config = Config {
        load_on_open: false,
        ..Config::default()
    };
    let mut controller = MenuController::attach(&page, "toggle", wide_tree(), config, &bus);
    controller.handle_resize(80, 24);

    let snapshot = controller.model.cards.clone();

    let mut page = demo_page();
    controller.open(&mut page);
    controller.tick(&mut page, 600);

    assert_eq!(controller.model.cards, snapshot);
}

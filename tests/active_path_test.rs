//! Tests for the initially open card
//!
//! Returning users should land on the card for the page they are on
//! (deepest card along the active path) unless `start_on_home` forces the
//! root card.

use slidemenu::config::Config;
use slidemenu::controller::MenuController;
use slidemenu::events::EventBus;
use slidemenu::menu::{parse_menu_items, MenuItem};
use slidemenu::model::CardId;
use slidemenu::page::Page;

fn demo_page() -> Page {
    let mut page = Page::new("Test");
    page.add_toggle("toggle", "menu", "Menu");
    page.add_container("menu");
    page.body = (0..30).map(|i| format!("line {}", i)).collect();
    page
}

/// Depth-3 chain of cards with the current item on the deepest level
fn deep_tree() -> Vec<MenuItem> {
    let json = r#"[
        {"id": 1, "title": "Level 1", "children": [
            {"id": 2, "parentId": 1, "title": "Level 2", "children": [
                {"id": 3, "parentId": 2, "title": "Level 3", "children": [
                    {"id": 4, "parentId": 3, "title": "Current page", "isCurrent": true}
                ]}
            ]}
        ]}
    ]"#;
    parse_menu_items(json).unwrap()
}

fn open_with(config: Config, items: Vec<MenuItem>) -> (Page, MenuController) {
    let mut page = demo_page();
    let bus = EventBus::new();
    let mut controller = MenuController::attach(&page, "toggle", items, config, &bus);
    controller.handle_resize(80, 24);
    controller.open(&mut page);
    controller.tick(&mut page, 600);
    (page, controller)
}

/// Default (`start_on_home: false`): the deepest active-path card opens
#[test]
fn test_opens_on_deepest_active_card() {
    let (_page, controller) = open_with(Config::default(), deep_tree());

    let expected = controller.model.cards.card_for_item(3).unwrap();
    assert_eq!(controller.model.navigation.open_card, expected);
    assert_ne!(controller.model.navigation.open_card, CardId::ROOT);
}

/// `start_on_home: true` always opens the root card, active path or not
#[test]
fn test_start_on_home_opens_root() {
    let config = Config {
        start_on_home: true,
        ..Config::default()
    };
    let (_page, controller) = open_with(config, deep_tree());

    assert_eq!(controller.model.navigation.open_card, CardId::ROOT);
}

/// Without any active flag the root card opens even in default mode
#[test]
fn test_no_active_path_falls_back_to_root() {
    let mut parent = MenuItem::new(1, "Parent");
    parent.children.push(MenuItem::new(2, "Child"));
    let (_page, controller) = open_with(Config::default(), vec![parent]);

    assert_eq!(controller.model.navigation.open_card, CardId::ROOT);
}

/// The active card path is recorded root-first on the model
#[test]
fn test_active_card_path_is_root_first_chain() {
    let (_page, controller) = open_with(Config::default(), deep_tree());

    let path = &controller.model.navigation.active_card_path;
    assert_eq!(path.first(), Some(&CardId::ROOT));
    assert_eq!(path.len(), 4); // root + cards for items 1, 2, 3
    assert_eq!(
        path.last(),
        Some(&controller.model.cards.card_for_item(3).unwrap())
    );
}

/// Re-opening after browsing elsewhere lands back on the active card
#[test]
fn test_reopen_returns_to_active_card() {
    let (mut page, mut controller) = open_with(Config::default(), deep_tree());

    // Step back to the parent card, then close
    controller.previous();
    controller.tick(&mut page, 600);
    controller.close(&mut page);
    controller.tick(&mut page, 600);

    // Next open starts from the active path again
    controller.open(&mut page);
    controller.tick(&mut page, 600);
    let expected = controller.model.cards.card_for_item(3).unwrap();
    assert_eq!(controller.model.navigation.open_card, expected);
}

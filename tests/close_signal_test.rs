//! Tests for externally requested close
//!
//! Any collaborator can put a close request for a menu on the bus. The menu
//! must mirror its toggle immediately when it starts closing, then settle
//! to Closed through the animation.

use slidemenu::config::Config;
use slidemenu::controller::MenuController;
use slidemenu::events::{EventBus, MenuEvent, Signal};
use slidemenu::menu::MenuItem;
use slidemenu::page::Page;
use slidemenu::MenuPhase;

fn demo_page() -> Page {
    let mut page = Page::new("Test");
    page.add_toggle("toggle", "menu", "Menu");
    page.add_container("menu");
    page.body = (0..30).map(|i| format!("line {}", i)).collect();
    page
}

fn demo_items() -> Vec<MenuItem> {
    let mut parent = MenuItem::new(1, "Parent");
    parent.children.push(MenuItem::new(2, "Child"));
    vec![parent]
}

fn open_menu() -> (Page, MenuController, EventBus) {
    let mut page = demo_page();
    let bus = EventBus::new();
    let mut controller =
        MenuController::attach(&page, "toggle", demo_items(), Config::default(), &bus);
    controller.handle_resize(80, 24);
    controller.open(&mut page);
    controller.tick(&mut page, 600);
    assert_eq!(controller.model.ui.phase, MenuPhase::Open);
    (page, controller, bus)
}

/// A close request transitions Closing -> Closed, and the toggle reads
/// collapsed immediately, not when the animation finishes
#[test]
fn test_close_request_closes_with_immediate_toggle_mirror() {
    let (mut page, mut controller, bus) = open_menu();

    bus.request_close(controller.id());

    // The request is picked up on the next tick; a zero-length tick makes
    // no animation progress
    controller.tick(&mut page, 0);
    assert_eq!(controller.model.ui.phase, MenuPhase::Closing);
    assert!(!page.toggle("toggle").unwrap().expanded);

    controller.tick(&mut page, 600);
    assert_eq!(controller.model.ui.phase, MenuPhase::Closed);
}

/// The closing menu emits Closing then Closed on the bus
#[test]
fn test_close_request_emits_lifecycle_events() {
    let (mut page, mut controller, bus) = open_menu();
    let rx = bus.subscribe();

    bus.request_close(controller.id());
    controller.tick(&mut page, 0);
    controller.tick(&mut page, 600);

    let events: Vec<MenuEvent> = rx
        .try_iter()
        .filter_map(|signal| match signal {
            Signal::Menu { event, .. } => Some(event),
            _ => None,
        })
        .collect();
    assert_eq!(events, vec![MenuEvent::Closing, MenuEvent::Closed]);
}

/// Requests addressed to another menu are ignored
#[test]
fn test_close_request_for_other_menu_is_ignored() {
    let (mut page, mut controller, bus) = open_menu();

    bus.request_close("some-other-menu");
    controller.tick(&mut page, 0);

    assert_eq!(controller.model.ui.phase, MenuPhase::Open);
    assert!(page.toggle("toggle").unwrap().expanded);
}

/// A close request while already closed stays a no-op
#[test]
fn test_close_request_while_closed_is_noop() {
    let (mut page, mut controller, bus) = open_menu();
    controller.close(&mut page);
    controller.tick(&mut page, 600);

    let rx = bus.subscribe();
    bus.request_close(controller.id());
    controller.tick(&mut page, 0);

    assert_eq!(controller.model.ui.phase, MenuPhase::Closed);
    assert_eq!(
        rx.try_iter()
            .filter(|s| matches!(s, Signal::Menu { .. }))
            .count(),
        0
    );
}

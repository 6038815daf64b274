//! Bus Signal Handler
//!
//! Policies applied to bus traffic by the embedding application. The
//! controllers themselves only honor close requests; how menus react to
//! each other is wired here, keeping cross-widget coordination an explicit
//! dependency instead of an ambient convention.

use crate::controller::MenuController;
use crate::events::{EventBus, MenuEvent, Signal};

/// Mutual exclusion between independently attached menus: when one menu
/// starts opening, every other menu is asked to close itself.
pub fn apply_mutual_exclusion(signal: &Signal, menus: &[MenuController], bus: &EventBus) {
    let Signal::Menu { menu_id, event } = signal else {
        return;
    };
    if *event != MenuEvent::Opening {
        return;
    }
    for menu in menus {
        if menu.id() != menu_id && !menu.is_inert() {
            bus.request_close(menu.id());
        }
    }
}

//! Keyboard Input Handler
//!
//! Handles all keyboard input. Keys route to the open menu when one is
//! anywhere in its open lifecycle (the focus trap), and to the page
//! (toggle focus, body scrolling) otherwise.

use crossterm::event::{KeyCode, KeyEvent};

use crate::controller::MenuController;
use crate::logic::layout;
use crate::page::Page;

/// What the caller should do after a key was processed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Handled,
    Quit,
}

/// Handle keyboard input
///
/// `viewport` is the terminal size, used for page scroll clamping.
pub fn handle_key(
    page: &mut Page,
    menus: &mut [MenuController],
    key: KeyEvent,
    viewport: (u16, u16),
) -> KeyOutcome {
    // An open (or animating) menu captures the keyboard
    if let Some(menu) = menus.iter_mut().find(|m| m.model.ui.is_visible()) {
        handle_menu_key(page, menu, key);
        return KeyOutcome::Handled;
    }

    handle_page_key(page, menus, key, viewport)
}

/// Keys while a menu holds the keyboard (focus trap)
fn handle_menu_key(page: &mut Page, menu: &mut MenuController, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            // Close the whole menu; focus returns to the toggle when the
            // close completes
            menu.close(page);
        }
        KeyCode::Tab => menu.focus_next(),
        KeyCode::BackTab => menu.focus_prev(),
        KeyCode::Down => {
            menu.focus_next();
        }
        KeyCode::Up => {
            if menu.model.navigation.focus.is_none() {
                // ArrowUp while focus is still on the toggle closes
                menu.close(page);
            } else {
                menu.focus_prev();
            }
        }
        KeyCode::Right => {
            if let Some(child) = menu.model.focused_entry().and_then(|e| e.child) {
                menu.next(child);
            }
        }
        KeyCode::Left | KeyCode::Backspace => menu.previous(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            match menu.model.focused_entry().map(|e| (e.child, e.link.clone())) {
                Some((Some(child), _)) => menu.next(child),
                Some((None, link)) => {
                    // Leaf activation: record the destination and close
                    menu.model.ui.last_activated_link = Some(link);
                    menu.close(page);
                }
                None => {
                    // Focus still on the toggle: activation toggles
                    menu.close(page);
                }
            }
        }
        _ => {}
    }
}

/// Keys while every menu is closed
fn handle_page_key(
    page: &mut Page,
    menus: &mut [MenuController],
    key: KeyEvent,
    viewport: (u16, u16),
) -> KeyOutcome {
    let body_height = layout::card_height(viewport.1, layout::HEADER_HEIGHT);

    match key.code {
        KeyCode::Char('q') => return KeyOutcome::Quit,
        KeyCode::Left => page.focus_prev_toggle(),
        KeyCode::Right => page.focus_next_toggle(),
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down => {
            // Activation or ArrowDown on the focused toggle opens its menu
            if let Some(toggle_id) = page.focused_toggle().map(|t| t.id.clone()) {
                if let Some(menu) = menus.iter_mut().find(|m| m.toggle_id() == toggle_id) {
                    menu.open(page);
                }
            }
        }
        KeyCode::Char('j') => page.scroll_by(1, body_height),
        KeyCode::Char('k') => page.scroll_by(-1, body_height),
        KeyCode::PageDown => page.scroll_by(body_height as i32, body_height),
        KeyCode::PageUp => page.scroll_by(-(body_height as i32), body_height),
        _ => {}
    }

    KeyOutcome::Handled
}

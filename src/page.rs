//! Page abstraction
//!
//! The page is the menu's only external collaborator: a header with toggle
//! elements, a registry of named containers (a toggle's `controls` id must
//! resolve here), and a scrollable body the menu overlays. The controller
//! owns nothing of the page; it validates against it at attach time and
//! applies scroll locking through it.

use crate::logic::scroll::{self, ScrollLock};

/// A trigger element in the header; `controls` names the container this
/// toggle opens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toggle {
    pub id: String,
    pub controls: String,
    pub label: String,
    /// Mirrors the menu's open state; flipped immediately on the
    /// triggering transition, not at animation completion
    pub expanded: bool,
}

/// A named region the menu renders into. `prerendered` holds caller-built
/// lines for menus constructed without an item tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub id: String,
    pub prerendered: Vec<String>,
}

/// The document behind the menu
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub title: String,
    pub toggles: Vec<Toggle>,
    pub containers: Vec<Container>,
    /// Body content lines (the scrollable document)
    pub body: Vec<String>,
    /// Current scroll offset into `body`
    pub scroll: u16,
    /// Present while the page is scroll-locked
    pub lock: Option<ScrollLock>,
    /// Index of the toggle holding keyboard focus
    pub focused_toggle: usize,
}

impl Page {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            toggles: Vec::new(),
            containers: Vec::new(),
            body: Vec::new(),
            scroll: 0,
            lock: None,
            focused_toggle: 0,
        }
    }

    pub fn add_toggle(&mut self, id: &str, controls: &str, label: &str) {
        self.toggles.push(Toggle {
            id: id.to_string(),
            controls: controls.to_string(),
            label: label.to_string(),
            expanded: false,
        });
    }

    pub fn add_container(&mut self, id: &str) {
        self.containers.push(Container {
            id: id.to_string(),
            prerendered: Vec::new(),
        });
    }

    pub fn toggle(&self, id: &str) -> Option<&Toggle> {
        self.toggles.iter().find(|t| t.id == id)
    }

    pub fn toggle_mut(&mut self, id: &str) -> Option<&mut Toggle> {
        self.toggles.iter_mut().find(|t| t.id == id)
    }

    pub fn container(&self, id: &str) -> Option<&Container> {
        self.containers.iter().find(|c| c.id == id)
    }

    pub fn container_mut(&mut self, id: &str) -> Option<&mut Container> {
        self.containers.iter_mut().find(|c| c.id == id)
    }

    pub fn focused_toggle(&self) -> Option<&Toggle> {
        self.toggles.get(self.focused_toggle)
    }

    pub fn focus_next_toggle(&mut self) {
        if !self.toggles.is_empty() {
            self.focused_toggle = (self.focused_toggle + 1) % self.toggles.len();
        }
    }

    pub fn focus_prev_toggle(&mut self) {
        if !self.toggles.is_empty() {
            self.focused_toggle =
                (self.focused_toggle + self.toggles.len() - 1) % self.toggles.len();
        }
    }

    /// Move focus back to the toggle that owns the given container
    /// (used when a menu closes)
    pub fn focus_toggle_for(&mut self, container_id: &str) {
        if let Some(idx) = self.toggles.iter().position(|t| t.controls == container_id) {
            self.focused_toggle = idx;
        }
    }

    pub fn content_height(&self) -> u16 {
        self.body.len() as u16
    }

    pub fn is_locked(&self) -> bool {
        self.lock.is_some()
    }

    /// Scroll the body by a signed number of lines; ignored while locked
    pub fn scroll_by(&mut self, delta: i32, viewport_height: u16) {
        if self.is_locked() {
            return;
        }
        let next = if delta < 0 {
            self.scroll.saturating_sub(delta.unsigned_abs() as u16)
        } else {
            self.scroll.saturating_add(delta as u16)
        };
        self.scroll = scroll::clamp_scroll(next, self.content_height(), viewport_height);
    }

    /// Freeze scrolling: capture the current offset and reset the locked
    /// viewport to the top. Idempotent while already locked.
    pub fn lock_scroll(&mut self, viewport_height: u16) {
        if self.lock.is_none() {
            self.lock = Some(scroll::capture(
                self.scroll,
                self.content_height(),
                viewport_height,
            ));
            self.scroll = 0;
        }
    }

    /// Restore the captured scroll offset and resume scrolling
    pub fn unlock_scroll(&mut self, viewport_height: u16) {
        if let Some(lock) = self.lock.take() {
            self.scroll = scroll::clamp_scroll(
                lock.captured_offset,
                self.content_height(),
                viewport_height,
            );
        }
    }
}

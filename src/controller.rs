//! Slide menu controller
//!
//! One controller drives one menu: it validates its toggle/container pair
//! against the page at attach time, builds the card arena (lazily by
//! default), runs the open/close state machine and card slides from the
//! frame clock, and publishes lifecycle events on the bus it was given.
//!
//! Failure philosophy: a controller never throws at its caller. A broken
//! attachment (missing toggle or container) degrades to an inert widget
//! that warns once and ignores every subsequent operation.

use std::sync::mpsc::Receiver;

use crate::config::Config;
use crate::events::{EventBus, MenuEvent, Signal};
use crate::logic::{animation, build, focus, layout, tree};
use crate::menu::MenuItem;
use crate::model::{CardId, CardTransition, Model, TransitionKind};
use crate::page::Page;
use crate::MenuPhase;

pub struct MenuController {
    /// Menu id used on the bus; equals the container id
    id: String,
    toggle_id: String,
    config: Config,
    menu_items: Vec<MenuItem>,
    pub model: Model,
    bus: EventBus,
    signals: Option<Receiver<Signal>>,
    inert: bool,
}

impl MenuController {
    /// Attach a controller to a page.
    ///
    /// The toggle must exist and its `controls` id must name an existing
    /// container; otherwise the controller comes up inert with a warning
    /// recorded on its model. `menu_items` may be empty, in which case the
    /// container's pre-rendered content is used as-is and no build runs.
    pub fn attach(
        page: &Page,
        toggle_id: &str,
        menu_items: Vec<MenuItem>,
        config: Config,
        bus: &EventBus,
    ) -> Self {
        let mut model = Model::new();

        let container_id = match page.toggle(toggle_id) {
            Some(toggle) => {
                let controls = toggle.controls.clone();
                if page.container(&controls).is_none() {
                    model.ui.warning = Some(format!(
                        "menu container '{}' referenced by toggle '{}' does not exist",
                        controls, toggle_id
                    ));
                    None
                } else {
                    Some(controls)
                }
            }
            None => {
                model.ui.warning = Some(format!("menu toggle '{}' does not exist", toggle_id));
                None
            }
        };

        let inert = container_id.is_none();
        let mut controller = Self {
            id: container_id.unwrap_or_default(),
            toggle_id: toggle_id.to_string(),
            config,
            menu_items,
            model,
            bus: bus.clone(),
            signals: (!inert).then(|| bus.subscribe()),
            inert,
        };

        if !inert && !controller.config.load_on_open {
            controller.ensure_loaded();
        }

        controller
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn toggle_id(&self) -> &str {
        &self.toggle_id
    }

    pub fn is_inert(&self) -> bool {
        self.inert
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build the card arena once. A repeated call is a no-op; an empty item
    /// tree marks the menu loaded without touching the container's
    /// pre-rendered content.
    fn ensure_loaded(&mut self) {
        if self.model.ui.loaded {
            return;
        }
        if !self.menu_items.is_empty() {
            self.model.cards = build::build_cards(&self.menu_items, &self.id);
            self.model.navigation.active_card_path =
                build::card_path(&self.model.cards, &tree::active_path(&self.menu_items));
        }
        self.model.ui.loaded = true;
    }

    /// The card shown first on open: the root with `start_on_home`, the
    /// deepest active-path card otherwise
    fn start_card(&self) -> CardId {
        if self.config.start_on_home {
            return CardId::ROOT;
        }
        self.model
            .navigation
            .active_card_path
            .last()
            .copied()
            .unwrap_or(CardId::ROOT)
    }

    /// Viewport height available to the page body (below the header,
    /// above the status line)
    fn body_height(&self) -> u16 {
        layout::card_height(self.model.ui.viewport.1, layout::HEADER_HEIGHT)
    }

    /// Open the menu. No-op while already Opening or Open, and on inert
    /// controllers.
    pub fn open(&mut self, page: &mut Page) {
        if self.inert {
            return;
        }
        let Some((phase, progress)) =
            animation::begin_open(self.model.ui.phase, self.model.ui.phase_progress)
        else {
            return;
        };

        self.ensure_loaded();

        // A flip out of Closing keeps the current card; a fresh open lands
        // on the start card
        if self.model.ui.phase == MenuPhase::Closed {
            let start = self.start_card();
            self.model.navigation.reset_for_open(start);
        }

        if self.config.scroll_helper {
            page.lock_scroll(self.body_height());
        }
        if let Some(toggle) = page.toggle_mut(&self.toggle_id) {
            toggle.expanded = true;
        }

        self.model.ui.phase = phase;
        self.model.ui.phase_progress = progress;
        self.bus.emit_menu(&self.id, MenuEvent::Opening);
    }

    /// Close the menu. No-op while already Closing or Closed, and on inert
    /// controllers.
    pub fn close(&mut self, page: &mut Page) {
        if self.inert {
            return;
        }
        let Some((phase, progress)) =
            animation::begin_close(self.model.ui.phase, self.model.ui.phase_progress)
        else {
            return;
        };

        // Mirror the toggle immediately, not at animation completion
        if let Some(toggle) = page.toggle_mut(&self.toggle_id) {
            toggle.expanded = false;
        }

        self.model.ui.phase = phase;
        self.model.ui.phase_progress = progress;
        self.model.navigation.transition = None;
        self.bus.emit_menu(&self.id, MenuEvent::Closing);
    }

    /// Toggle activation: open when closed (or closing), close otherwise
    pub fn toggle(&mut self, page: &mut Page) {
        match self.model.ui.phase {
            MenuPhase::Closed | MenuPhase::Closing => self.open(page),
            MenuPhase::Open | MenuPhase::Opening => self.close(page),
        }
    }

    /// Slide a child card in. The target must be a direct child of the
    /// open card; anything else is silently ignored, as is a request while
    /// another slide runs or the menu is not fully open.
    pub fn next(&mut self, target: CardId) {
        if self.inert
            || self.model.ui.phase != MenuPhase::Open
            || self.model.navigation.in_transition()
        {
            return;
        }
        let is_child = self
            .model
            .open_card()
            .map(|card| card.children.contains(&target))
            .unwrap_or(false);
        if !is_child {
            return;
        }
        self.model.navigation.transition = Some(CardTransition {
            kind: TransitionKind::Next,
            card: target,
            progress: 0.0,
        });
    }

    /// Slide the open card out, returning to its recorded parent. With no
    /// recorded parent (the root card) the request is silently ignored.
    pub fn previous(&mut self) {
        if self.inert
            || self.model.ui.phase != MenuPhase::Open
            || self.model.navigation.in_transition()
        {
            return;
        }
        let open = self.model.navigation.open_card;
        if self.model.cards.parent_of(open).is_none() {
            return;
        }
        self.model.navigation.transition = Some(CardTransition {
            kind: TransitionKind::Previous,
            card: open,
            progress: 0.0,
        });
    }

    /// Record a terminal resize: card heights track the header's lower
    /// edge; open/closed state is untouched
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        self.model.ui.viewport = (width, height);
        self.model.ui.card_height = layout::card_height(height, layout::HEADER_HEIGHT);
    }

    /// Advance animations by one frame and process bus signals.
    ///
    /// All automatic transitions happen here, driven by actual animation
    /// progress reaching 1.0.
    pub fn tick(&mut self, page: &mut Page, dt_ms: u64) {
        if self.inert {
            return;
        }

        self.pump_signals(page);
        self.step_card_transition(dt_ms);
        self.step_phase(page, dt_ms);
    }

    /// Drain the bus: a close request addressed to this menu closes it.
    /// Lifecycle reports from other menus are not interpreted here; how to
    /// react to them (e.g. mutual exclusion) is the embedder's policy.
    fn pump_signals(&mut self, page: &mut Page) {
        let mut close_requested = false;
        if let Some(rx) = &self.signals {
            while let Ok(signal) = rx.try_recv() {
                if let Signal::CloseRequest { target } = signal {
                    if target == self.id {
                        close_requested = true;
                    }
                }
            }
        }
        if close_requested {
            self.close(page);
        }
    }

    fn step_card_transition(&mut self, dt_ms: u64) {
        let Some(transition) = self.model.navigation.transition else {
            return;
        };
        let (progress, done) = animation::step_progress(
            transition.progress,
            dt_ms,
            self.config.animation_duration,
        );
        if !done {
            self.model.navigation.transition = Some(CardTransition {
                progress,
                ..transition
            });
            return;
        }

        self.model.navigation.transition = None;
        match transition.kind {
            TransitionKind::Next => {
                self.model.navigation.open_card = transition.card;
                self.focus_first_entry();
                self.bus.emit_menu(&self.id, MenuEvent::NextOpened);
            }
            TransitionKind::Previous => {
                if let Some(parent) = self.model.cards.parent_of(transition.card) {
                    self.model.navigation.open_card = parent;
                }
                self.focus_first_entry();
                self.bus.emit_menu(&self.id, MenuEvent::PreviousOpened);
            }
        }
    }

    fn step_phase(&mut self, page: &mut Page, dt_ms: u64) {
        let step = animation::step_phase(
            self.model.ui.phase,
            self.model.ui.phase_progress,
            dt_ms,
            self.config.animation_duration,
        );
        self.model.ui.phase = step.phase;
        self.model.ui.phase_progress = step.progress;

        match step.completed {
            Some(animation::PhaseChange::Opened) => {
                self.focus_first_entry();
                self.bus.emit_menu(&self.id, MenuEvent::Opened);
            }
            Some(animation::PhaseChange::Closed) => {
                if self.config.scroll_helper {
                    page.unlock_scroll(self.body_height());
                }
                self.model.navigation.focus = None;
                page.focus_toggle_for(&self.id);
                self.bus.emit_menu(&self.id, MenuEvent::Closed);
            }
            None => {}
        }
    }

    fn focus_first_entry(&mut self) {
        let len = focus::focusable_len(&self.model.cards, self.model.navigation.open_card);
        self.model.navigation.focus = focus::next_focus(None, len);
    }

    /// Move focus forward through the open card, wrapping at the end
    pub fn focus_next(&mut self) {
        let len = focus::focusable_len(&self.model.cards, self.model.navigation.open_card);
        self.model.navigation.focus = focus::next_focus(self.model.navigation.focus, len);
    }

    /// Move focus backward through the open card, wrapping at the start
    pub fn focus_prev(&mut self) {
        let len = focus::focusable_len(&self.model.cards, self.model.navigation.open_card);
        self.model.navigation.focus = focus::prev_focus(self.model.navigation.focus, len);
    }

    /// Detach from the page and the bus. Unlocks scrolling if this menu
    /// held the lock; afterwards the controller is inert.
    pub fn detach(&mut self, page: &mut Page) {
        if self.inert {
            return;
        }
        if self.model.ui.is_visible() && self.config.scroll_helper {
            page.unlock_scroll(self.body_height());
        }
        if let Some(toggle) = page.toggle_mut(&self.toggle_id) {
            toggle.expanded = false;
        }
        self.model.ui.phase = MenuPhase::Closed;
        self.model.ui.phase_progress = 0.0;
        self.model.navigation.transition = None;
        self.signals = None;
        self.inert = true;
    }
}

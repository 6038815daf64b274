//! Menu event bus
//!
//! Cross-widget coordination is an explicit dependency: menus publish their
//! lifecycle signals on a bus handed to them at attach time, and consume
//! close requests from the same bus. Nothing is ambient; a menu with no bus
//! subscription cannot be reached by other widgets.
//!
//! The bus is single-threaded fan-out over `std::sync::mpsc` channels:
//! every subscriber gets every signal, and dead receivers are dropped on
//! the next emit.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc::{channel, Receiver, Sender};

/// Lifecycle signals a menu emits; the only public output of a controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    Opening,
    Opened,
    Closing,
    Closed,
    NextOpened,
    PreviousOpened,
}

impl MenuEvent {
    pub fn as_str(&self) -> &str {
        match self {
            MenuEvent::Opening => "opening",
            MenuEvent::Opened => "opened",
            MenuEvent::Closing => "closing",
            MenuEvent::Closed => "closed",
            MenuEvent::NextOpened => "next-opened",
            MenuEvent::PreviousOpened => "previous-opened",
        }
    }
}

/// A message on the bus
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    /// A menu reporting a lifecycle transition
    Menu { menu_id: String, event: MenuEvent },
    /// Ask the named menu to close itself
    CloseRequest { target: String },
}

/// Shared fan-out bus; cloning shares the subscriber list
#[derive(Clone, Default)]
pub struct EventBus {
    subscribers: Rc<RefCell<Vec<Sender<Signal>>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new subscriber and return its receiving end
    pub fn subscribe(&self) -> Receiver<Signal> {
        let (tx, rx) = channel();
        self.subscribers.borrow_mut().push(tx);
        rx
    }

    /// Deliver a signal to every live subscriber, pruning dead ones
    pub fn emit(&self, signal: Signal) {
        self.subscribers
            .borrow_mut()
            .retain(|tx| tx.send(signal.clone()).is_ok());
    }

    /// Publish a menu lifecycle event
    pub fn emit_menu(&self, menu_id: &str, event: MenuEvent) {
        self.emit(Signal::Menu {
            menu_id: menu_id.to_string(),
            event,
        });
    }

    /// Ask the named menu to close itself
    pub fn request_close(&self, target: &str) {
        self.emit(Signal::CloseRequest {
            target: target.to_string(),
        });
    }

    /// Number of live subscribers (after the last prune)
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }
}

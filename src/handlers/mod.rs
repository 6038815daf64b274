//! Event Handlers
//!
//! This module contains handlers for different types of events:
//! - keyboard: User keyboard input, routed to the page or the open menu
//! - events: Bus signal policies (mutual exclusion between menus)

pub mod events;
pub mod keyboard;

// Re-export for convenience
pub use events::apply_mutual_exclusion;
pub use keyboard::{handle_key, KeyOutcome};

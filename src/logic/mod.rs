//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - animation: Open/close state machine stepping and slide offsets
//! - build: One-shot card arena construction from the menu tree
//! - classes: State class derivation for menu, cards, and entries
//! - focus: Focus trap movement and focusable-set membership
//! - layout: Screen regions and card height calculations
//! - scroll: Scroll lock capture/restore math
//! - tree: Menu tree traversal and active-path computation

pub mod animation;
pub mod build;
pub mod classes;
pub mod focus;
pub mod layout;
pub mod scroll;
pub mod tree;

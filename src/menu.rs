//! Menu tree input
//!
//! The menu is described by a JSON tree of items, provided once at
//! construction. The tree is immutable input: cards are built from it and
//! never re-derive it. `children` ordering is render order.

use anyhow::{Context, Result};
use serde::Deserialize;

/// One node of the caller-provided menu tree
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: u64,
    #[serde(default)]
    pub parent_id: Option<u64>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_current: bool,
    /// Advisory only; the effective value is recomputed from `children`
    #[serde(default)]
    pub has_children: bool,
    #[serde(default)]
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    /// Create a bare item (used by tests and the demo tree builder)
    pub fn new(id: u64, title: &str) -> Self {
        Self {
            id,
            parent_id: None,
            title: title.to_string(),
            link: String::new(),
            target: None,
            is_active: false,
            is_current: false,
            has_children: false,
            children: Vec::new(),
        }
    }

    /// Whether this item really has children, regardless of the input flag
    pub fn effective_has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Parse a JSON document into the root level of a menu tree
pub fn parse_menu_items(json: &str) -> Result<Vec<MenuItem>> {
    serde_json::from_str(json).context("failed to parse menu items JSON")
}

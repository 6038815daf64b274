use serde::Deserialize;

/// State/animation class names carried on the menu root, cards, and entries
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ClassNames {
    #[serde(default = "default_open")]
    pub open: String,
    #[serde(default = "default_opening")]
    pub opening: String,
    #[serde(default = "default_closing")]
    pub closing: String,
    #[serde(default = "default_show")]
    pub show: String,
    #[serde(default = "default_active")]
    pub active: String,
    #[serde(default = "default_current")]
    pub current: String,
    #[serde(default = "default_has_children")]
    pub has_children: String,
    #[serde(default = "default_locked_scrollable")]
    pub locked_scrollable: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            open: default_open(),
            opening: default_opening(),
            closing: default_closing(),
            show: default_show(),
            active: default_active(),
            current: default_current(),
            has_children: default_has_children(),
            locked_scrollable: default_locked_scrollable(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Slide animation length in milliseconds
    #[serde(default = "default_animation_duration")]
    pub animation_duration: u64,
    /// Defer the card build until the menu first opens
    #[serde(default = "default_true")]
    pub load_on_open: bool,
    /// Always open on the root card, ignoring the active path
    #[serde(default)]
    pub start_on_home: bool,
    /// Lock page scrolling while the menu is open
    #[serde(default = "default_true")]
    pub scroll_helper: bool,
    #[serde(default)]
    pub classes: ClassNames,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            animation_duration: default_animation_duration(),
            load_on_open: true,
            start_on_home: false,
            scroll_helper: true,
            classes: ClassNames::default(),
        }
    }
}

fn default_animation_duration() -> u64 {
    500
}

fn default_true() -> bool {
    true
}

fn default_open() -> String {
    "open".to_string()
}

fn default_opening() -> String {
    "opening".to_string()
}

fn default_closing() -> String {
    "closing".to_string()
}

fn default_show() -> String {
    "show".to_string()
}

fn default_active() -> String {
    "active".to_string()
}

fn default_current() -> String {
    "current".to_string()
}

fn default_has_children() -> String {
    "has-children".to_string()
}

fn default_locked_scrollable() -> String {
    "locked-scrollable".to_string()
}

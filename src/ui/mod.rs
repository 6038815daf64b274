// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - render: Main orchestration function that coordinates all rendering
// - page: Renders the header bar (with toggles) and the scrollable body
// - card: Renders the open card and the moving card during slides
// - status_bar: Renders bottom status bar with phase, classes, and hints

pub mod card;
pub mod page;
pub mod render;
pub mod status_bar;

// Re-export main render function for convenience
pub use render::render;

use ratatui::Frame;

use crate::controller::MenuController;
use crate::logic::layout;
use crate::page::Page;

use super::{card, page as page_ui, status_bar};

/// Main render function - orchestrates all UI rendering
/// This replaces the large terminal.draw() closure in main.rs
pub fn render(f: &mut Frame, page: &Page, menus: &[MenuController]) {
    let size = f.area();
    let layout_info = layout::calculate_layout(size);

    page_ui::render_header(f, layout_info.header_area, page);
    page_ui::render_body(f, layout_info.body_area, page);

    // At most one menu is visible; render it above the body
    if let Some(menu) = menus.iter().find(|m| m.model.ui.is_visible()) {
        let prerendered = page
            .container(menu.id())
            .map(|c| c.prerendered.as_slice())
            .unwrap_or(&[]);
        card::render_menu(f, layout_info.body_area, menu, prerendered);
    }

    status_bar::render_status_bar(f, layout_info.status_area, page, menus);
}

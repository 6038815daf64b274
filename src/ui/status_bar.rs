use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::controller::MenuController;
use crate::logic::classes;
use crate::page::Page;

/// Render the bottom status bar
/// - Shows the visible menu's phase, open card, and class set
/// - Falls back to scroll position and key hints while everything is closed
/// - Warnings from degraded controllers always win the line
pub fn render_status_bar(f: &mut Frame, area: Rect, page: &Page, menus: &[MenuController]) {
    // A degraded controller's warning takes the whole line
    if let Some(warning) = menus.iter().find_map(|m| m.model.ui.warning.as_deref()) {
        let line = Line::from(Span::styled(
            format!(" warning: {}", warning),
            Style::default().fg(Color::Yellow),
        ));
        f.render_widget(Paragraph::new(line), area);
        return;
    }

    let mut spans: Vec<Span> = Vec::new();

    if let Some(menu) = menus.iter().find(|m| m.model.ui.is_visible()) {
        let card_title = menu
            .model
            .open_card()
            .map(|c| c.title.as_str())
            .unwrap_or(menu.id());
        spans.push(Span::styled(
            format!(" {} · {}", menu.model.ui.phase.as_str(), card_title),
            Style::default().fg(Color::Cyan),
        ));

        let root = classes::root_classes(menu.model.ui.phase, &menu.config().classes);
        let lock = classes::page_lock_classes(page.lock.as_ref(), &menu.config().classes);
        let all: Vec<String> = root.into_iter().chain(lock).collect();
        if !all.is_empty() {
            spans.push(Span::styled(
                format!("  [{}]", all.join(" ")),
                Style::default().fg(Color::Rgb(120, 120, 120)),
            ));
        }

        spans.push(Span::styled(
            "  Esc close · Tab cycle · Enter/→ drill · ←/Bksp back",
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        if let Some(link) = menus
            .iter()
            .find_map(|m| m.model.ui.last_activated_link.as_deref())
        {
            spans.push(Span::styled(
                format!(" → {}", link),
                Style::default().fg(Color::Green),
            ));
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            format!(" line {}", page.scroll + 1),
            Style::default().fg(Color::Gray),
        ));
        spans.push(Span::styled(
            "  ←/→ toggles · Enter/↓ open · j/k scroll · q quit",
            Style::default().fg(Color::DarkGray),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

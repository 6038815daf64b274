//! Page rendering
//!
//! Renders the header bar (toggles live here) and the scrollable body
//! document behind the menu. While the page is scroll-locked the body dims
//! and keeps its frozen offset.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::page::Page;

/// Render the header bar with the page title and its toggles
pub fn render_header(f: &mut Frame, area: Rect, page: &Page) {
    let mut spans: Vec<Span> = vec![
        Span::styled(
            &*page.title,
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
    ];

    for (idx, toggle) in page.toggles.iter().enumerate() {
        let arrow = if toggle.expanded { "▴" } else { "▾" };
        let label = format!("[ {} {} ]", toggle.label, arrow);
        let style = if idx == page.focused_toggle {
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray)),
    );
    f.render_widget(header, area);
}

/// Render the body document at its current scroll offset
pub fn render_body(f: &mut Frame, area: Rect, page: &Page) {
    let style = if page.is_locked() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };

    let lines: Vec<Line> = page
        .body
        .iter()
        .skip(page.scroll as usize)
        .take(area.height as usize)
        .map(|l| Line::from(l.as_str()))
        .collect();

    f.render_widget(Paragraph::new(lines).style(style), area);
}

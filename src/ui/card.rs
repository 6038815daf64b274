//! Card panel rendering
//!
//! Renders the open card as a bordered list filling the body area, and the
//! moving card during a slide at its animated horizontal offset. Entry rows
//! show the title on the left and the link right-aligned and dimmed, with
//! unicode-aware padding.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::controller::MenuController;
use crate::logic::animation;
use crate::model::{Card, CardEntry, TransitionKind};
use crate::MenuPhase;

/// Build one entry row: marker, title, padding, dimmed link
fn build_entry_row<'a>(entry: &'a CardEntry, panel_width: u16) -> ListItem<'a> {
    let marker = if entry.has_children() { "▸ " } else { "  " };

    let mut title_style = Style::default();
    if entry.is_active {
        title_style = title_style.fg(Color::Cyan);
    }
    if entry.is_current {
        title_style = title_style.add_modifier(Modifier::UNDERLINED);
    }

    let mut line_spans = vec![Span::raw(marker), Span::styled(&*entry.title, title_style)];

    // Right-align the link if it fits: width - borders(2) - highlight(2)
    let available_width = panel_width.saturating_sub(4) as usize;
    let name_width = marker.width() + entry.title.width();
    let link_width = entry.link.width();
    let spacing = 2;

    if !entry.link.is_empty() && name_width + spacing + link_width <= available_width {
        let padding = available_width - name_width - link_width;
        line_spans.push(Span::raw(" ".repeat(padding)));
        line_spans.push(Span::styled(
            &*entry.link,
            Style::default().fg(Color::Rgb(120, 120, 120)),
        ));
    }

    ListItem::new(Line::from(line_spans))
}

/// Render one card into `area`
fn render_card_panel(f: &mut Frame, area: Rect, card: &Card, focus: Option<usize>) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let items: Vec<ListItem> = card
        .entries
        .iter()
        .map(|entry| build_entry_row(entry, area.width))
        .collect();

    let title = if card.parent.is_some() {
        format!(" ‹ {} ", card.title)
    } else {
        format!(" {} ", card.title)
    };

    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ratatui::widgets::ListState::default();
    state.select(focus);

    // The menu floats above the page
    f.render_widget(Clear, area);
    f.render_stateful_widget(list, area, &mut state);
}

/// Render pre-rendered container lines for menus built without an item tree
fn render_prerendered(f: &mut Frame, area: Rect, title: &str, lines: &[String]) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let items: Vec<ListItem> = lines.iter().map(|l| ListItem::new(l.as_str())).collect();
    let list = List::new(items).block(
        Block::default()
            .title(format!(" {} ", title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(Clear, area);
    f.render_widget(list, area);
}

/// Shift an area right by `offset`, clipping at its right edge
fn offset_area(area: Rect, offset: u16) -> Rect {
    let offset = offset.min(area.width);
    Rect {
        x: area.x + offset,
        width: area.width - offset,
        ..area
    }
}

/// Render a menu's cards into the body area
pub fn render_menu(f: &mut Frame, area: Rect, menu: &MenuController, prerendered: &[String]) {
    let model = &menu.model;

    // Menu without a built arena: show the container's own content
    if model.cards.is_empty() {
        if model.ui.is_visible() {
            render_prerendered(f, area, menu.id(), prerendered);
        }
        return;
    }

    // The whole menu slides with the open/close animation
    let menu_offset = match model.ui.phase {
        MenuPhase::Closed => return,
        MenuPhase::Opening => animation::slide_in_offset(area.width, model.ui.phase_progress),
        MenuPhase::Open => 0,
        MenuPhase::Closing => animation::slide_out_offset(area.width, model.ui.phase_progress),
    };
    let menu_area = offset_area(area, menu_offset);

    match model.navigation.transition {
        Some(transition) => {
            let (base_card, moving_card, moving_offset) = match transition.kind {
                TransitionKind::Next => (
                    model.cards.get(model.navigation.open_card),
                    model.cards.get(transition.card),
                    animation::slide_in_offset(menu_area.width, transition.progress),
                ),
                TransitionKind::Previous => (
                    model
                        .cards
                        .parent_of(transition.card)
                        .and_then(|id| model.cards.get(id)),
                    model.cards.get(transition.card),
                    animation::slide_out_offset(menu_area.width, transition.progress),
                ),
            };

            if let Some(card) = base_card {
                render_card_panel(f, menu_area, card, None);
            }
            if let Some(card) = moving_card {
                render_card_panel(f, offset_area(menu_area, moving_offset), card, None);
            }
        }
        None => {
            if let Some(card) = model.open_card() {
                render_card_panel(f, menu_area, card, model.navigation.focus);
            }
        }
    }
}

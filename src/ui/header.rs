//! Header bar with the site navigation and its dropdown menus

use crate::app::App;
use crate::content::NAV_ITEMS;
use crate::state::{dropdown_rect, is_active, item_columns, NAV_ROW, SUBMENU_MARKER};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const LOGO: &str = "◆ AIOH";

/// Draw the header bar. Label columns come from the nav state so mouse
/// hit-tests line up with what is on screen.
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(block, area);

    let row = area.y + NAV_ROW;
    let logo = Paragraph::new(Span::styled(
        LOGO,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(logo, Rect::new(area.x + 2, row, 7.min(area.width), 1));

    let nav = &app.state.nav;
    let right_edge = area.x + area.width.saturating_sub(1);
    for (idx, (item, (start, end))) in NAV_ITEMS.iter().zip(item_columns()).enumerate() {
        if end > right_edge {
            break;
        }

        let mut style = if is_active(item, &app.state.route) {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        if nav.open == Some(idx) {
            style = style.fg(Color::Yellow);
        }
        if nav.focused && nav.highlighted == idx {
            style = style.add_modifier(Modifier::REVERSED);
        }

        let mut spans = vec![Span::styled(item.label, style)];
        if item.has_submenu() {
            spans.push(Span::styled(
                SUBMENU_MARKER,
                Style::default().fg(Color::DarkGray),
            ));
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(start, row, end - start, 1),
        );
    }
}

/// Draw the open dropdown over the page, if any
pub fn draw_dropdown(frame: &mut Frame, app: &App) {
    let nav = &app.state.nav;
    let (Some(idx), Some(item)) = (nav.open, nav.open_item()) else {
        return;
    };
    let screen = frame.area();
    let Some(rect) = dropdown_rect(idx, screen.width) else {
        return;
    };
    let rect = rect.intersection(screen);

    let mut lines = Vec::with_capacity(item.submenu.len() * 2);
    for (pos, link) in item.submenu.iter().enumerate() {
        let selected = nav.focused && pos == nav.dropdown_cursor;
        let label_style = if selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else if app.state.route.starts_with(link.route) {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        lines.push(Line::from(Span::styled(format!(" {} ", link.label), label_style)));
        lines.push(Line::from(Span::styled(
            format!(" {}", link.description),
            Style::default().fg(Color::DarkGray),
        )));
    }

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .style(Style::default().bg(Color::Black)),
        ),
        rect,
    );
}

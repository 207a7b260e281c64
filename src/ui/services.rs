//! Services page: intro and a grid of sub-service cards

use crate::app::App;
use crate::content::{service_description, service_intro};
use crate::lead::MainService;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const MIN_CARD_WIDTH: u16 = 28;
const CARD_HEIGHT: u16 = 6;

/// Number of card columns that fit in a page of `width` columns
pub fn grid_columns(width: u16) -> usize {
    (width / MIN_CARD_WIDTH).max(1) as usize
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App, service: MainService) {
    let (title, blurb) = service_intro(service);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),             // Intro
            Constraint::Min(0),                // Cards
            Constraint::Length(BUTTON_HEIGHT), // Contact button
        ])
        .split(area);

    let intro = Paragraph::new(vec![
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(blurb, Style::default().fg(Color::Gray))),
    ])
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::BOTTOM).border_style(Style::default().fg(Color::DarkGray)));
    frame.render_widget(intro, chunks[0]);

    draw_grid(frame, chunks[1], app, service);

    let button_width = 24.min(area.width);
    render_button(
        frame,
        Rect::new(chunks[2].x + 1, chunks[2].y, button_width, BUTTON_HEIGHT),
        "Contact Us (c)",
        false,
        true,
    );
}

fn draw_grid(frame: &mut Frame, area: Rect, app: &App, service: MainService) {
    let cards = service.sub_services();
    let columns = grid_columns(area.width);
    let card_width = area.width / columns as u16;
    let description = service_description(service);

    for (idx, name) in cards.iter().enumerate() {
        let col = (idx % columns) as u16;
        let row = (idx / columns) as u16;
        let y = area.y + row * CARD_HEIGHT;
        if y + CARD_HEIGHT > area.y + area.height {
            break;
        }
        let rect = Rect::new(area.x + col * card_width, y, card_width, CARD_HEIGHT);

        let is_selected = !app.state.nav.focused && idx == app.state.selected_service_card;
        let border_style = if is_selected {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let title_style = if is_selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };

        let card = Paragraph::new(description)
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(Span::styled(format!(" {name} "), title_style))
                    .borders(Borders::ALL)
                    .border_style(border_style),
            );
        frame.render_widget(card, rect);
    }
}

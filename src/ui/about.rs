//! About page: location cards with auto-rotating image sliders

use crate::app::App;
use crate::content::{LocationCard, LocationLayout, LOCATIONS};
use crate::state::{Carousel, CarouselFrame, LocationSliders};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use std::time::Instant;

const SLIDER_HEIGHT: u16 = 3;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let now = Instant::now();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    let heading = Paragraph::new(Line::from(Span::styled(
        " Our Locations",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(heading, chunks[0]);

    let constraints = vec![Constraint::Ratio(1, LOCATIONS.len() as u32); LOCATIONS.len()];
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(chunks[1]);

    for ((card, sliders), rect) in LOCATIONS.iter().zip(&app.state.sliders).zip(cards.iter()) {
        draw_card(frame, *rect, card, sliders, now);
    }
}

fn draw_card(
    frame: &mut Frame,
    area: Rect,
    card: &LocationCard,
    sliders: &LocationSliders,
    now: Instant,
) {
    let block = Block::default()
        .title(format!(" {} ", card.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match card.layout {
        LocationLayout::Full => {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(SLIDER_HEIGHT), Constraint::Min(0)])
                .split(inner);
            draw_slider(frame, rows[0], &sliders.card, now);

            let mut lines = vec![Line::from(card.description), Line::from("")];
            lines.extend(contact_lines(card.address, card.phone));
            frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), rows[1]);
        }
        LocationLayout::Split => {
            let mut constraints = vec![
                Constraint::Length(SLIDER_HEIGHT),
                Constraint::Length(4),
            ];
            constraints.extend(card.sub_locations.iter().map(|_| Constraint::Min(6)));
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints(constraints)
                .split(inner);

            draw_slider(frame, rows[0], &sliders.card, now);
            frame.render_widget(
                Paragraph::new(card.description).wrap(Wrap { trim: true }),
                rows[1],
            );

            for ((sub, carousel), rect) in card
                .sub_locations
                .iter()
                .zip(&sliders.subs)
                .zip(rows.iter().skip(2))
            {
                let sub_block = Block::default()
                    .title(format!(" {} ", sub.label))
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(Color::DarkGray));
                let sub_inner = sub_block.inner(*rect);
                frame.render_widget(sub_block, *rect);

                let parts = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(SLIDER_HEIGHT), Constraint::Min(0)])
                    .split(sub_inner);
                draw_slider(frame, parts[0], carousel, now);
                frame.render_widget(
                    Paragraph::new(contact_lines(Some(sub.address), Some(sub.phone)))
                        .wrap(Wrap { trim: true }),
                    parts[1],
                );
            }
        }
    }
}

fn contact_lines(address: Option<&'static str>, phone: Option<&'static str>) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::Cyan);
    let mut lines = Vec::new();
    if let Some(address) = address {
        lines.push(Line::from(vec![
            Span::styled("Address: ", label),
            Span::raw(address),
        ]));
    }
    if let Some(phone) = phone {
        lines.push(Line::from(vec![Span::styled("Phone: ", label), Span::raw(phone)]));
    }
    lines
}

/// One slider: image names slide in from the right during a transition
fn draw_slider(frame: &mut Frame, area: Rect, carousel: &Carousel, now: Instant) {
    if carousel.is_empty() {
        return;
    }
    let Some(frame_state) = carousel.frame(now) else {
        return;
    };

    let dots: String = (0..carousel.len())
        .map(|i| if i == frame_state.index { '●' } else { '○' })
        .collect();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue))
        .title_bottom(Line::from(format!(" {dots} ")).centered());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = slide_line(&frame_state, inner.width);
    frame.render_widget(
        Paragraph::new(Span::styled(text, Style::default().fg(Color::White))),
        inner,
    );
}

/// Text window over `previous` followed by `current`, shifted by the
/// transition progress
fn slide_line(frame: &CarouselFrame, width: u16) -> String {
    let w = width as usize;
    if w == 0 {
        return String::new();
    }
    let previous = format!("🖼 {}", frame.previous);
    let current = format!("🖼 {}", frame.current);
    let strip: Vec<char> = format!("{previous:^w$.w$}{current:^w$.w$}")
        .chars()
        .collect();
    let offset = (frame.progress.clamp(0.0, 1.0) * w as f32).round() as usize;
    strip.iter().skip(offset).take(w).collect()
}

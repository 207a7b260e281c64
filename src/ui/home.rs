//! Landing page

use crate::content::service_intro;
use crate::lead::MainService;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(area);

    let hero = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "All in One Holdings",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Marketing, technology and design under one roof",
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(hero, chunks[0]);

    let constraints = vec![Constraint::Ratio(1, MainService::ALL.len() as u32); MainService::ALL.len()];
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(chunks[1]);

    for (service, rect) in MainService::ALL.iter().zip(columns.iter()) {
        let (title, blurb) = service_intro(*service);
        let card = Paragraph::new(vec![
            Line::from(Span::styled(
                title,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(blurb),
        ])
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {} ", service.label()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(card, *rect);
    }
}

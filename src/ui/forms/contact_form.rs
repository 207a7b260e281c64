//! Contact page: lead form on the left, company details on the right

use super::field_renderer::draw_field;
use crate::app::App;
use crate::content::CONTACT_INFO;
use crate::state::{ContactForm, CONTACT_FIELDS, SUBMIT_ROW};
use crate::ui::components::{render_submit_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

const INFO_PANEL_WIDTH: u16 = 36;

/// Screen regions of the contact page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLayout {
    pub form: Rect,
    /// One rect per field, then the submit button
    pub rows: Vec<Rect>,
    pub info: Rect,
}

impl ContactLayout {
    /// Form row (field index or `SUBMIT_ROW`) under a screen position
    pub fn row_at(&self, col: u16, row: u16) -> Option<usize> {
        self.rows
            .iter()
            .position(|r| r.contains(Position { x: col, y: row }))
    }
}

/// Split the page area the same way for drawing and for mouse hit-tests
pub fn contact_layout(area: Rect) -> ContactLayout {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(INFO_PANEL_WIDTH)])
        .split(area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Name
            Constraint::Length(3),             // Contact number
            Constraint::Length(3),             // E-mail
            Constraint::Length(3),             // Main service
            Constraint::Length(3),             // Sub service
            Constraint::Min(5),                // Message
            Constraint::Length(BUTTON_HEIGHT), // Send
        ])
        .margin(1)
        .split(columns[0]);

    ContactLayout {
        form: columns[0],
        rows: rows.to_vec(),
        info: columns[1],
    }
}

/// Where the option list of an expanded select field goes: below the
/// field if it fits, otherwise above it
pub fn picker_rect(field: Rect, option_count: usize, screen: Rect) -> Rect {
    let height = (option_count as u16 + 2).min(screen.height);
    let below = field.y + field.height;
    let y = if below + height <= screen.y + screen.height {
        below
    } else {
        field.y.saturating_sub(height).max(screen.y)
    };
    Rect {
        x: field.x,
        y,
        width: field.width,
        height,
    }
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.contact;
    let layout = contact_layout(area);

    let border_color = if app.state.nav.focused {
        Color::DarkGray
    } else {
        Color::Cyan
    };
    let block = Block::default()
        .title(" Send Us A Message ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, layout.form);

    let errors = form.lead.errors();
    for (idx, field) in CONTACT_FIELDS.iter().enumerate() {
        draw_field(
            frame,
            layout.rows[idx],
            field,
            form.lead.fields().raw(field.name),
            !app.state.nav.focused && form.active_field_index == idx,
            errors.is_invalid(field.name),
        );
    }

    render_submit_button(
        frame,
        layout.rows[SUBMIT_ROW],
        !app.state.nav.focused && form.is_submit_row_active(),
        form.lead.is_sending(),
    );

    draw_info_panel(frame, layout.info);
    draw_picker(frame, &layout, form);
}

fn draw_picker(frame: &mut Frame, layout: &ContactLayout, form: &ContactForm) {
    let (Some(cursor), Some(field)) = (form.picker, form.active_descriptor()) else {
        return;
    };
    let options = form.options_for(field.name);
    if options.is_empty() {
        return;
    }

    let area = picker_rect(layout.rows[form.active_field_index], options.len(), frame.area());
    let items: Vec<ListItem> = options.iter().map(|o| ListItem::new(*o)).collect();
    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" {} ", field.label))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .style(Style::default().bg(Color::Black)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    let mut state = ListState::default().with_selected(Some(cursor));

    frame.render_widget(Clear, area);
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_info_panel(frame: &mut Frame, area: Rect) {
    let heading = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(Span::styled("Get in touch", heading)),
        Line::from(""),
        Line::from(Span::styled("Address", heading)),
    ];
    lines.extend(CONTACT_INFO.address.iter().map(|l| Line::from(*l)));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Phone", heading)));
    lines.extend(CONTACT_INFO.phones.iter().map(|p| Line::from(*p)));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("E-mail", heading)));
    lines.push(Line::from(CONTACT_INFO.email));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Follow us", heading)));
    for (name, url) in CONTACT_INFO.socials {
        lines.push(Line::from(vec![
            Span::raw(format!("{name}: ")),
            Span::styled(*url, Style::default().fg(Color::Blue)),
        ]));
    }

    let panel = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(panel, area);
}

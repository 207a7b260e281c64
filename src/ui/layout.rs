//! Layout components (header frame, status bar)

use crate::app::App;
use crate::platform::{PASTE_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{View, HEADER_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into header, page content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // Header
            Constraint::Min(0),                // Page
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Page area for a screen of the given size
pub fn content_area(width: u16, height: u16) -> Rect {
    create_layout(Rect::new(0, 0, width, height)).1
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Mail relay status
    let relay_status = if app.relay_configured {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ○ ", Style::default().fg(Color::Red))
    };
    spans.push(relay_status);

    let hints = get_view_hints(&app.state.current_view, app.state.nav.focused);
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    if app.state.contact.lead.is_sending() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled("Sending...", Style::default().fg(Color::Yellow)));
    }

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    spans.push(Span::raw(" | "));
    spans.push(Span::styled(
        format!("{} {}", app.state.current_view.title(), app.state.route),
        Style::default().fg(Color::Blue),
    ));

    let quit_hint = " ^C:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View, nav_focused: bool) -> String {
    if nav_focused {
        return "h/l:menu  Enter/↓:open  j/k:submenu  Esc:back to page".to_string();
    }
    match view {
        View::Home => "Tab:menu  s:services  c:contact".to_string(),
        View::About => "Tab:menu".to_string(),
        View::Services(_) => "Tab:menu  h/j/k/l:select  c:contact us".to_string(),
        View::Contact => format!(
            "↑/↓ Tab:field  Enter:choose  {}:send  {}:paste  Esc:menu",
            SUBMIT_SHORTCUT, PASTE_SHORTCUT
        ),
    }
}

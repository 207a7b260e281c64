//! Application state and core logic

use crate::config::SiteConfig;
use crate::content::NAV_ITEMS;
use crate::lead::{self, SubmitOutcome};
use crate::platform::PASTE_MODIFIER;
use crate::relay::{MailRelay, RelayError};
use crate::state::{
    dropdown_rect, item_at_column, AppState, Form, PointerTarget, UiArea, View, CONTACT_FIELDS,
    NAV_ROW, SUBMIT_ROW,
};
use crate::ui::{
    content_area,
    forms::{contact_layout, picker_rect},
    services::grid_columns,
};
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use uuid::Uuid;

/// Relay reports that may queue up before the loop drains them
const REPORT_CHANNEL_CAPACITY: usize = 8;

/// Outcome of one relay call, tagged with the form it was sent from
#[derive(Debug)]
pub struct RelayReport {
    pub generation: u64,
    pub request_id: Uuid,
    pub result: Result<(), RelayError>,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    relay: Arc<dyn MailRelay>,
    /// Whether mail relay credentials were found
    pub relay_configured: bool,
    reports_tx: mpsc::Sender<RelayReport>,
    reports_rx: mpsc::Receiver<RelayReport>,
    /// Whether the app should quit
    quit: bool,
    /// Terminal size for hit-testing (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    pub fn new(config: &SiteConfig, relay: Arc<dyn MailRelay>, relay_configured: bool) -> Self {
        let state = AppState::new(
            config.initial_route(),
            config.phone_rule(),
            config.hover_close_delay(),
            config.carousel_interval(),
            Instant::now(),
        );
        let (reports_tx, reports_rx) = mpsc::channel(REPORT_CHANNEL_CAPACITY);

        if !relay_configured {
            tracing::warn!("Mail relay credentials missing; contact form messages will fail");
        }

        Self {
            state,
            relay,
            relay_configured,
            reports_tx,
            reports_rx,
            quit: false,
            terminal_size: None,
        }
    }

    /// Check if the app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether something on screen is moving and wants fast redraws
    pub fn is_animating(&self) -> bool {
        self.state.current_view == View::About || self.state.nav.is_close_pending()
    }

    fn screen_size(&self) -> (u16, u16) {
        self.terminal_size.unwrap_or((24, 80))
    }

    /// Time-driven updates, called once per loop iteration
    pub fn tick(&mut self, now: Instant) {
        self.state.tick(now);
        while let Ok(report) = self.reports_rx.try_recv() {
            self.apply_report(report);
        }
    }

    fn apply_report(&mut self, report: RelayReport) {
        let request_id = report.request_id;
        if report.generation != self.state.contact_generation {
            tracing::debug!(%request_id, "Dropping relay result for a replaced form");
            return;
        }

        let outcome = self
            .state
            .contact
            .lead
            .finish_submit(report.result, &mut self.state.notices);
        if outcome.is_success() {
            self.state.contact.set_active_field(0);
            self.state.status_message =
                Some(format!("Message sent at {}", Local::now().format("%H:%M")));
        }
    }

    /// Validate the contact form and hand a clean lead to the relay task
    fn submit_contact(&mut self) {
        match self.state.contact.lead.begin_submit() {
            SubmitOutcome::Busy => {}
            SubmitOutcome::Invalid(errors) => {
                if let Some(first) = errors.invalid_fields().first() {
                    if let Some(idx) = CONTACT_FIELDS.iter().position(|f| f.name == *first) {
                        self.state.contact.set_active_field(idx);
                    }
                }
            }
            SubmitOutcome::Sending(payload) => {
                let relay = Arc::clone(&self.relay);
                let tx = self.reports_tx.clone();
                let generation = self.state.contact_generation;
                let request_id = Uuid::new_v4();

                tokio::spawn(async move {
                    let result = lead::dispatch(relay.as_ref(), &payload, request_id).await;
                    let report = RelayReport {
                        generation,
                        request_id,
                        result,
                    };
                    if tx.send(report).await.is_err() {
                        tracing::debug!(%request_id, "Relay finished after shutdown");
                    }
                });
            }
        }
    }

    fn navigate(&mut self, route: &str) {
        self.state.navigate(route, Instant::now());
        self.state.nav.focused = false;
    }

    fn paste_from_clipboard(&mut self) {
        match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.get_text()) {
            Ok(text) => self.state.contact.paste(&text),
            Err(err) => {
                tracing::warn!("Clipboard paste failed: {err}");
                self.state.status_message = Some("Clipboard unavailable".to_string());
            }
        }
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) {
        // A notice is modal until dismissed
        if self.state.notices.has_notice() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.state.notices.dismiss();
            }
            return;
        }

        if key.code == KeyCode::Char('s')
            && key.modifiers.contains(KeyModifiers::CONTROL)
            && self.state.current_view == View::Contact
        {
            self.state.nav.focused = false;
            self.submit_contact();
            return;
        }

        if self.state.nav.focused {
            self.handle_nav_key(key);
            return;
        }

        match self.state.current_view {
            View::Home => self.handle_home_key(key),
            View::About => self.handle_page_key(key),
            View::Services(_) => self.handle_services_key(key),
            View::Contact => self.handle_contact_key(key),
        }
    }

    fn handle_nav_key(&mut self, key: KeyEvent) {
        let nav = &mut self.state.nav;
        let dropdown_open = nav.open.is_some();

        match key.code {
            KeyCode::Left | KeyCode::Char('h') => nav.prev(),
            KeyCode::Right | KeyCode::Char('l') => nav.next(),
            KeyCode::Down | KeyCode::Char('j') => {
                if dropdown_open {
                    nav.dropdown_next();
                } else {
                    nav.open_dropdown(nav.highlighted);
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if dropdown_open {
                    nav.dropdown_prev();
                }
            }
            KeyCode::Enter => {
                let highlighted = nav.highlighted;
                if nav.open == Some(highlighted) || !nav.highlighted_item().has_submenu() {
                    let route = nav.selected_route();
                    self.navigate(route);
                } else {
                    nav.toggle_dropdown(highlighted);
                }
            }
            KeyCode::Esc | KeyCode::Tab => {
                if dropdown_open {
                    nav.close();
                } else {
                    nav.focused = false;
                }
            }
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    fn focus_nav(&mut self) {
        self.state.contact.cancel_picker();
        self.state.nav.focused = true;
    }

    /// Keys shared by the read-only pages
    fn handle_page_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::Esc => self.focus_nav(),
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('s') => self.navigate("/Marketing"),
            KeyCode::Char('a') => self.navigate("/Aboutus"),
            KeyCode::Char('c') => self.state.open_contact(),
            _ => self.handle_page_key(key),
        }
    }

    fn handle_services_key(&mut self, key: KeyEvent) {
        let (_, width) = self.screen_size();
        let columns = grid_columns(width) as isize;
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.state.move_service_selection(-1),
            KeyCode::Right | KeyCode::Char('l') => self.state.move_service_selection(1),
            KeyCode::Down | KeyCode::Char('j') => self.state.move_service_selection(columns),
            KeyCode::Up | KeyCode::Char('k') => self.state.move_service_selection(-columns),
            KeyCode::Char('c') | KeyCode::Enter => self.state.open_contact(),
            _ => self.handle_page_key(key),
        }
    }

    fn handle_contact_key(&mut self, key: KeyEvent) {
        let form = &mut self.state.contact;

        if form.picker.is_some() {
            match key.code {
                KeyCode::Up | KeyCode::Char('k') => form.picker_prev(),
                KeyCode::Down | KeyCode::Char('j') => form.picker_next(),
                KeyCode::Enter | KeyCode::Char(' ') => form.confirm_picker(),
                KeyCode::Esc => form.cancel_picker(),
                KeyCode::Tab => form.next_field(),
                KeyCode::BackTab => form.prev_field(),
                _ => {}
            }
            return;
        }

        let on_select = form.active_descriptor().is_some_and(|f| f.is_select());
        let on_message = form.active_descriptor().is_some_and(|f| f.is_multiline());

        match key.code {
            KeyCode::Esc => self.focus_nav(),
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Enter => {
                if form.is_submit_row_active() {
                    self.submit_contact();
                } else if on_select {
                    form.open_picker();
                } else if on_message {
                    form.newline();
                } else {
                    form.next_field();
                }
            }
            KeyCode::Backspace => form.backspace(),
            KeyCode::Char('v') if key.modifiers.contains(PASTE_MODIFIER) => {
                self.paste_from_clipboard();
            }
            KeyCode::Char(' ') if on_select => form.open_picker(),
            KeyCode::Char(' ') if form.is_submit_row_active() => self.submit_contact(),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
            {
                form.input_char(c);
            }
            _ => {}
        }
    }

    /// What the pointer is over, as far as hover intent is concerned
    fn pointer_target(&self, col: u16, row: u16) -> PointerTarget {
        let (_, width) = self.screen_size();
        let pos = Position { x: col, y: row };
        if let Some(rect) = self.state.nav.open.and_then(|idx| dropdown_rect(idx, width)) {
            if rect.contains(pos) {
                return PointerTarget::Dropdown;
            }
        }
        if row == UiArea::Header.start_y() + NAV_ROW {
            if let Some(idx) = item_at_column(col) {
                return PointerTarget::NavItem(idx);
            }
        }
        PointerTarget::Elsewhere
    }

    /// Handle mouse input
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let now = Instant::now();
        match mouse.kind {
            MouseEventKind::Moved => {
                let target = self.pointer_target(mouse.column, mouse.row);
                self.state.nav.pointer_moved(target, now);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if self.state.notices.has_notice() {
                    self.state.notices.dismiss();
                    return;
                }
                self.handle_click(mouse.column, mouse.row);
            }
            MouseEventKind::ScrollDown if self.state.contact.picker.is_some() => {
                self.state.contact.picker_next();
            }
            MouseEventKind::ScrollUp if self.state.contact.picker.is_some() => {
                self.state.contact.picker_prev();
            }
            _ => {}
        }
    }

    fn handle_click(&mut self, col: u16, row: u16) {
        match self.pointer_target(col, row) {
            PointerTarget::Dropdown => {
                let (_, width) = self.screen_size();
                let nav = &self.state.nav;
                let link = nav.open.zip(nav.open_item()).and_then(|(idx, item)| {
                    let rect = dropdown_rect(idx, width)?;
                    // Entries start below the top border, two rows each
                    let entry = row.checked_sub(rect.y + 1)? / 2;
                    item.submenu.get(entry as usize)
                });
                if let Some(link) = link {
                    self.navigate(link.route);
                }
            }
            PointerTarget::NavItem(idx) => {
                self.state.nav.highlighted = idx;
                let item = &NAV_ITEMS[idx];
                if item.has_submenu() {
                    self.state.nav.toggle_dropdown(idx);
                } else {
                    self.navigate(item.route);
                }
            }
            PointerTarget::Elsewhere => {
                if self.state.nav.open.is_some() {
                    self.state.nav.click_outside();
                    return;
                }
                if UiArea::Content.contains_row(row) {
                    self.state.nav.focused = false;
                    if self.state.current_view == View::Contact {
                        self.handle_contact_click(col, row);
                    }
                }
            }
        }
    }

    fn handle_contact_click(&mut self, col: u16, row: u16) {
        let (height, width) = self.screen_size();
        let screen = Rect::new(0, 0, width, height);
        let layout = contact_layout(content_area(width, height));
        let pos = Position { x: col, y: row };
        let form = &mut self.state.contact;

        if form.picker.is_some() {
            if let Some(field) = form.active_descriptor() {
                let options = form.options_for(field.name);
                let rect = picker_rect(layout.rows[form.active_field_index], options.len(), screen);
                // Options start below the top border
                let option = row.checked_sub(rect.y + 1).map(usize::from);
                if rect.contains(pos) {
                    if let Some(option) = option.filter(|o| *o < options.len()) {
                        form.picker = Some(option);
                        form.confirm_picker();
                    }
                    return;
                }
            }
            form.cancel_picker();
        }

        let Some(row_idx) = layout.row_at(col, row) else {
            return;
        };
        form.set_active_field(row_idx);
        if row_idx == SUBMIT_ROW {
            self.submit_contact();
        } else if form.active_descriptor().is_some_and(|f| f.is_select()) {
            form.open_picker();
        }
    }
}

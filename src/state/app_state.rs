//! Application state definitions

use super::carousel::Carousel;
use super::forms::ContactForm;
use super::nav::NavMenu;
use super::notices::NoticeQueue;
use crate::content::LOCATIONS;
use crate::lead::{MainService, PhoneRule};
use std::time::{Duration, Instant};

/// Route the contact page lives at
pub const CONTACT_ROUTE: &str = "/contact";

/// Current page in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    /// Company profile with the location carousels
    About,
    Services(MainService),
    Contact,
}

impl View {
    /// Resolve a route to a page. Unknown paths fall back to Home.
    pub fn from_route(path: &str) -> Self {
        let first = path.split('/').find(|s| !s.is_empty()).unwrap_or("");
        if first.is_empty() {
            return View::Home;
        }
        if first.eq_ignore_ascii_case("aboutus") {
            return View::About;
        }
        if first.eq_ignore_ascii_case("contact") {
            return View::Contact;
        }
        MainService::ALL
            .into_iter()
            .find(|s| s.label().eq_ignore_ascii_case(first))
            .map(View::Services)
            .unwrap_or(View::Home)
    }

    pub fn title(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::About => "About Us",
            View::Services(service) => service.label(),
            View::Contact => "Contact Us",
        }
    }
}

/// Carousels of one location card
#[derive(Debug, Clone)]
pub struct LocationSliders {
    pub card: Carousel,
    /// One per sub-location, in content order
    pub subs: Vec<Carousel>,
}

impl LocationSliders {
    fn restart(&mut self, now: Instant) {
        self.card.restart(now);
        for sub in &mut self.subs {
            sub.restart(now);
        }
    }
}

fn build_sliders(interval: Duration, now: Instant) -> Vec<LocationSliders> {
    LOCATIONS
        .iter()
        .map(|card| LocationSliders {
            card: Carousel::new(
                card.images,
                Duration::from_millis(card.start_delay_ms),
                interval,
                now,
            ),
            subs: card
                .sub_locations
                .iter()
                .map(|sub| {
                    Carousel::new(
                        sub.images,
                        Duration::from_millis(sub.start_delay_ms),
                        interval,
                        now,
                    )
                })
                .collect(),
        })
        .collect()
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub current_view: View,
    /// Full path of the current page, used as route context by the form
    pub route: String,
    pub nav: NavMenu,
    pub notices: NoticeQueue,
    pub contact: ContactForm,
    /// Bumped whenever `contact` is replaced, so stale relay results can be told apart
    pub contact_generation: u64,
    pub sliders: Vec<LocationSliders>,
    /// Selected card in the services grid
    pub selected_service_card: usize,
    pub status_message: Option<String>,
    phone_rule: PhoneRule,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            "/",
            PhoneRule::default(),
            Duration::from_millis(200),
            Duration::from_millis(5000),
            Instant::now(),
        )
    }
}

impl AppState {
    pub fn new(
        route: &str,
        phone_rule: PhoneRule,
        hover_close_delay: Duration,
        carousel_interval: Duration,
        now: Instant,
    ) -> Self {
        Self {
            current_view: View::from_route(route),
            route: route.to_string(),
            nav: NavMenu::new(hover_close_delay),
            notices: NoticeQueue::default(),
            contact: ContactForm::new(route, phone_rule),
            contact_generation: 0,
            sliders: build_sliders(carousel_interval, now),
            selected_service_card: 0,
            status_message: None,
            phone_rule,
        }
    }

    /// Switch page. The contact form is rebuilt with the new route as context.
    pub fn navigate(&mut self, route: &str, now: Instant) {
        tracing::debug!("Navigating to {route}");
        self.route = route.to_string();
        self.current_view = View::from_route(route);
        self.nav.close();
        self.selected_service_card = 0;
        self.status_message = None;

        match self.current_view {
            View::About => self.restart_sliders(now),
            View::Contact => self.replace_contact(route),
            _ => {}
        }
    }

    /// Open the contact page from the current page, keeping it as route context
    pub fn open_contact(&mut self) {
        let context = std::mem::replace(&mut self.route, CONTACT_ROUTE.to_string());
        self.current_view = View::Contact;
        self.nav.close();
        self.replace_contact(&context);
    }

    fn replace_contact(&mut self, context: &str) {
        self.contact = ContactForm::new(context, self.phone_rule);
        self.contact_generation += 1;
    }

    fn restart_sliders(&mut self, now: Instant) {
        for sliders in &mut self.sliders {
            sliders.restart(now);
        }
    }

    /// Sub-services listed on the current services page
    pub fn service_cards(&self) -> &'static [&'static str] {
        match self.current_view {
            View::Services(service) => service.sub_services(),
            _ => &[],
        }
    }

    /// Move the service grid selection by `delta` cards, clamped to the grid
    pub fn move_service_selection(&mut self, delta: isize) {
        let count = self.service_cards().len();
        if count == 0 {
            return;
        }
        let target = self.selected_service_card as isize + delta;
        self.selected_service_card = target.clamp(0, count as isize - 1) as usize;
    }

    /// Time-driven updates: hover intent
    pub fn tick(&mut self, now: Instant) {
        self.nav.tick(now);
    }
}

//! Header navigation state: highlight, open dropdown and hover intent

use super::ui_area::HEADER_HEIGHT;
use crate::content::{NavItem, NAV_ITEMS};
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

/// Column where the first nav label starts (after border and logo)
pub const NAV_START_COL: u16 = 10;
/// Blank columns between two nav labels
pub const NAV_ITEM_GAP: u16 = 3;
/// Suffix drawn after labels that own a dropdown
pub const SUBMENU_MARKER: &str = " ▾";

const DROPDOWN_MIN_WIDTH: u16 = 24;

/// Display width of a nav label including the dropdown marker
pub fn item_width(item: &NavItem) -> u16 {
    let marker = if item.has_submenu() {
        SUBMENU_MARKER.chars().count()
    } else {
        0
    };
    (item.label.chars().count() + marker) as u16
}

/// Half-open column range `[start, end)` of every nav label
pub fn item_columns() -> Vec<(u16, u16)> {
    let mut col = NAV_START_COL;
    NAV_ITEMS
        .iter()
        .map(|item| {
            let start = col;
            let end = start + item_width(item);
            col = end + NAV_ITEM_GAP;
            (start, end)
        })
        .collect()
}

/// Nav item under a header column, if any
pub fn item_at_column(col: u16) -> Option<usize> {
    item_columns()
        .iter()
        .position(|(start, end)| (*start..*end).contains(&col))
}

/// Screen rectangle of the dropdown for an item, clamped to the screen width
pub fn dropdown_rect(index: usize, screen_width: u16) -> Option<Rect> {
    let item = NAV_ITEMS.get(index)?;
    if !item.has_submenu() {
        return None;
    }

    let (start, _) = item_columns().get(index).copied()?;
    let content_width = item
        .submenu
        .iter()
        .map(|link| link.label.chars().count().max(link.description.chars().count()))
        .max()
        .unwrap_or(0) as u16;
    // 2 borders + 2 padding
    let width = (content_width + 4)
        .max(DROPDOWN_MIN_WIDTH)
        .min(screen_width);
    let x = start.min(screen_width.saturating_sub(width));
    // Each entry is a label line and a description line
    let height = item.submenu.len() as u16 * 2 + 2;

    Some(Rect {
        x,
        y: HEADER_HEIGHT,
        width,
        height,
    })
}

/// What the mouse pointer is currently over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerTarget {
    NavItem(usize),
    Dropdown,
    #[default]
    Elsewhere,
}

/// Header menu state
#[derive(Debug, Clone)]
pub struct NavMenu {
    /// Keyboard highlight in the top row
    pub highlighted: usize,
    /// Item whose dropdown is shown
    pub open: Option<usize>,
    /// Selected entry inside the open dropdown
    pub dropdown_cursor: usize,
    /// Whether keyboard focus is in the header
    pub focused: bool,
    pointer: PointerTarget,
    close_deadline: Option<Instant>,
    close_delay: Duration,
}

impl Default for NavMenu {
    fn default() -> Self {
        Self::new(Duration::from_millis(200))
    }
}

impl NavMenu {
    pub fn new(close_delay: Duration) -> Self {
        Self {
            highlighted: 0,
            open: None,
            dropdown_cursor: 0,
            focused: false,
            pointer: PointerTarget::Elsewhere,
            close_deadline: None,
            close_delay,
        }
    }

    pub fn highlighted_item(&self) -> &'static NavItem {
        &NAV_ITEMS[self.highlighted.min(NAV_ITEMS.len() - 1)]
    }

    pub fn open_item(&self) -> Option<&'static NavItem> {
        self.open.and_then(|idx| NAV_ITEMS.get(idx))
    }

    pub fn is_close_pending(&self) -> bool {
        self.close_deadline.is_some()
    }

    pub fn next(&mut self) {
        self.highlighted = (self.highlighted + 1) % NAV_ITEMS.len();
        self.follow_highlight();
    }

    pub fn prev(&mut self) {
        self.highlighted = if self.highlighted == 0 {
            NAV_ITEMS.len() - 1
        } else {
            self.highlighted - 1
        };
        self.follow_highlight();
    }

    /// Keep an open dropdown attached to the highlighted item
    fn follow_highlight(&mut self) {
        if self.open.is_some() {
            if self.highlighted_item().has_submenu() {
                self.open_dropdown(self.highlighted);
            } else {
                self.close();
            }
        }
    }

    pub fn open_dropdown(&mut self, index: usize) {
        if NAV_ITEMS.get(index).is_some_and(NavItem::has_submenu) {
            if self.open != Some(index) {
                self.dropdown_cursor = 0;
            }
            self.open = Some(index);
            self.close_deadline = None;
        }
    }

    pub fn toggle_dropdown(&mut self, index: usize) {
        if self.open == Some(index) {
            self.close();
        } else {
            self.open_dropdown(index);
        }
    }

    pub fn close(&mut self) {
        self.open = None;
        self.dropdown_cursor = 0;
        self.close_deadline = None;
    }

    pub fn dropdown_next(&mut self) {
        if let Some(item) = self.open_item() {
            self.dropdown_cursor = (self.dropdown_cursor + 1) % item.submenu.len();
        }
    }

    pub fn dropdown_prev(&mut self) {
        if let Some(item) = self.open_item() {
            let len = item.submenu.len();
            self.dropdown_cursor = (self.dropdown_cursor + len - 1) % len;
        }
    }

    /// Route the keyboard would navigate to: the dropdown entry if one is
    /// open, otherwise the highlighted item
    pub fn selected_route(&self) -> &'static str {
        match self.open_item() {
            Some(item) => item
                .submenu
                .get(self.dropdown_cursor)
                .map(|link| link.route)
                .unwrap_or(item.route),
            None => self.highlighted_item().route,
        }
    }

    /// Track pointer movement for hover intent.
    ///
    /// Entering an item with a submenu, or the dropdown itself, opens it and
    /// cancels a pending close. Leaving both schedules a close after the
    /// configured delay.
    pub fn pointer_moved(&mut self, target: PointerTarget, now: Instant) {
        let previous = self.pointer;
        self.pointer = target;

        match target {
            PointerTarget::NavItem(idx) => {
                self.highlighted = idx;
                if NAV_ITEMS.get(idx).is_some_and(NavItem::has_submenu) {
                    self.open_dropdown(idx);
                } else if previous != target {
                    self.schedule_close(now);
                }
            }
            PointerTarget::Dropdown => {
                self.close_deadline = None;
            }
            PointerTarget::Elsewhere => {
                if previous != PointerTarget::Elsewhere {
                    self.schedule_close(now);
                }
            }
        }
    }

    fn schedule_close(&mut self, now: Instant) {
        if self.open.is_some() {
            self.close_deadline = Some(now + self.close_delay);
        }
    }

    /// Close the dropdown once the hover grace period has run out, unless
    /// the pointer is resting on it
    pub fn tick(&mut self, now: Instant) {
        if let Some(deadline) = self.close_deadline {
            if now >= deadline {
                self.close_deadline = None;
                if self.pointer != PointerTarget::Dropdown {
                    self.open = None;
                    self.dropdown_cursor = 0;
                }
            }
        }
    }

    /// A click that landed outside both the header and the dropdown
    pub fn click_outside(&mut self) {
        self.close();
    }
}

/// Whether a nav item is the active page for `route`
pub fn is_active(item: &NavItem, route: &str) -> bool {
    route == item.route || item.submenu.iter().any(|link| route.starts_with(link.route))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marketing_index() -> usize {
        NAV_ITEMS.iter().position(|i| i.label == "Marketing").unwrap()
    }

    fn home_index() -> usize {
        NAV_ITEMS.iter().position(|i| i.label == "Home").unwrap()
    }

    mod layout {
        use super::*;

        #[test]
        fn test_columns_do_not_overlap() {
            let columns = item_columns();
            assert_eq!(columns.len(), NAV_ITEMS.len());
            for pair in columns.windows(2) {
                assert!(pair[0].1 + NAV_ITEM_GAP <= pair[1].0);
            }
        }

        #[test]
        fn test_item_at_column_hits_labels_only() {
            let columns = item_columns();
            let (start, end) = columns[1];
            assert_eq!(item_at_column(start), Some(1));
            assert_eq!(item_at_column(end - 1), Some(1));
            assert_eq!(item_at_column(end), None);
            assert_eq!(item_at_column(0), None);
        }

        #[test]
        fn test_dropdown_rect_only_for_submenus() {
            assert!(dropdown_rect(home_index(), 120).is_none());
            let rect = dropdown_rect(marketing_index(), 120).unwrap();
            assert_eq!(rect.y, HEADER_HEIGHT);
            assert_eq!(rect.height, 6);
            assert!(rect.width >= DROPDOWN_MIN_WIDTH);
        }

        #[test]
        fn test_dropdown_rect_fits_narrow_screen() {
            let rect = dropdown_rect(marketing_index(), 30).unwrap();
            assert!(rect.x + rect.width <= 30);
        }
    }

    mod keyboard {
        use super::*;

        #[test]
        fn test_highlight_wraps() {
            let mut menu = NavMenu::default();
            menu.prev();
            assert_eq!(menu.highlighted, NAV_ITEMS.len() - 1);
            menu.next();
            assert_eq!(menu.highlighted, 0);
        }

        #[test]
        fn test_toggle_opens_and_closes() {
            let mut menu = NavMenu::default();
            let idx = marketing_index();
            menu.toggle_dropdown(idx);
            assert_eq!(menu.open, Some(idx));
            menu.toggle_dropdown(idx);
            assert_eq!(menu.open, None);
        }

        #[test]
        fn test_leaf_items_never_open() {
            let mut menu = NavMenu::default();
            menu.toggle_dropdown(home_index());
            assert_eq!(menu.open, None);
        }

        #[test]
        fn test_selected_route_follows_dropdown_cursor() {
            let mut menu = NavMenu::default();
            let idx = marketing_index();
            menu.highlighted = idx;
            assert_eq!(menu.selected_route(), "/Marketing");

            menu.open_dropdown(idx);
            assert_eq!(menu.selected_route(), "/marketing/seo");
            menu.dropdown_next();
            assert_eq!(menu.selected_route(), "/marketing/content");
            menu.dropdown_next();
            assert_eq!(menu.selected_route(), "/marketing/seo");
            menu.dropdown_prev();
            assert_eq!(menu.selected_route(), "/marketing/content");
        }

        #[test]
        fn test_moving_highlight_moves_open_dropdown() {
            let mut menu = NavMenu::default();
            let idx = marketing_index();
            menu.highlighted = idx;
            menu.open_dropdown(idx);

            menu.next(); // Technology
            assert_eq!(menu.open, Some(idx + 1));

            menu.highlighted = home_index() + 1; // About
            menu.prev(); // Home, a leaf
            assert_eq!(menu.open, None);
        }
    }

    mod hover_intent {
        use super::*;

        #[test]
        fn test_entering_item_opens_immediately() {
            let mut menu = NavMenu::default();
            let now = Instant::now();
            menu.pointer_moved(PointerTarget::NavItem(marketing_index()), now);
            assert_eq!(menu.open, Some(marketing_index()));
            assert!(!menu.is_close_pending());
        }

        #[test]
        fn test_leaving_closes_after_delay() {
            let mut menu = NavMenu::new(Duration::from_millis(200));
            let now = Instant::now();
            menu.pointer_moved(PointerTarget::NavItem(marketing_index()), now);
            menu.pointer_moved(PointerTarget::Elsewhere, now);

            menu.tick(now + Duration::from_millis(100));
            assert!(menu.open.is_some());

            menu.tick(now + Duration::from_millis(200));
            assert!(menu.open.is_none());
        }

        #[test]
        fn test_moving_onto_dropdown_keeps_it_open() {
            let mut menu = NavMenu::new(Duration::from_millis(200));
            let now = Instant::now();
            menu.pointer_moved(PointerTarget::NavItem(marketing_index()), now);
            menu.pointer_moved(PointerTarget::Elsewhere, now);
            menu.pointer_moved(PointerTarget::Dropdown, now + Duration::from_millis(50));

            menu.tick(now + Duration::from_millis(500));
            assert_eq!(menu.open, Some(marketing_index()));
        }

        #[test]
        fn test_returning_before_deadline_cancels_close() {
            let mut menu = NavMenu::new(Duration::from_millis(200));
            let now = Instant::now();
            let idx = marketing_index();
            menu.pointer_moved(PointerTarget::NavItem(idx), now);
            menu.pointer_moved(PointerTarget::Elsewhere, now);
            menu.pointer_moved(PointerTarget::NavItem(idx), now + Duration::from_millis(100));

            menu.tick(now + Duration::from_millis(300));
            assert_eq!(menu.open, Some(idx));
        }

        #[test]
        fn test_click_outside_closes_at_once() {
            let mut menu = NavMenu::default();
            menu.open_dropdown(marketing_index());
            menu.click_outside();
            assert!(menu.open.is_none());
        }

        #[test]
        fn test_tick_without_deadline_is_noop() {
            let mut menu = NavMenu::default();
            menu.open_dropdown(marketing_index());
            menu.tick(Instant::now() + Duration::from_secs(10));
            assert!(menu.open.is_some());
        }
    }

    #[test]
    fn test_is_active_matches_route_and_submenu_prefix() {
        let marketing = &NAV_ITEMS[marketing_index()];
        assert!(is_active(marketing, "/Marketing"));
        assert!(is_active(marketing, "/marketing/seo"));
        assert!(!is_active(marketing, "/Design"));
    }
}

use ratatui::layout::{Position, Rect};
use vassa_types::{Effect, Route};

/// Rows of the collapsed navigation panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MobileEntry {
    Link(Route),
    /// "Free List Property" call-to-action; routes to the listing page.
    ListCta,
}

impl MobileEntry {
    pub fn route(&self) -> Route {
        match self {
            MobileEntry::Link(route) => route.clone(),
            MobileEntry::ListCta => Route::List,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            MobileEntry::Link(route) => route.mobile_label(),
            MobileEntry::ListCta => crate::ui::components::nav_bar::CTA_LABEL,
        }
    }
}

/// Panel entries in display order.
pub fn entries() -> Vec<MobileEntry> {
    Route::PRIMARY_LINKS
        .into_iter()
        .map(MobileEntry::Link)
        .chain(std::iter::once(MobileEntry::ListCta))
        .collect()
}

/// Open/closed state of the collapsed navigation panel shown on narrow terminals.
#[derive(Debug, Default, Clone)]
pub struct MobileMenuState {
    open: bool,
    highlighted: usize,
    panel_area: Rect,
    entry_areas: Vec<(MobileEntry, Rect)>,
}

impl MobileMenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open = true;
            self.highlighted = 0;
        }
    }

    pub fn close(&mut self) {
        self.open = false;
        self.highlighted = 0;
        self.panel_area = Rect::default();
        self.entry_areas.clear();
    }

    /// Closes the panel once the terminal is wide enough for the desktop bar.
    /// Never reopens it.
    pub fn on_resize(&mut self, width: u16, mobile_breakpoint: u16) -> bool {
        if self.open && width >= mobile_breakpoint {
            self.close();
            return true;
        }
        false
    }

    pub fn set_layout(&mut self, panel: Rect, entries: Vec<(MobileEntry, Rect)>) {
        self.panel_area = panel;
        self.entry_areas = entries;
    }

    pub fn panel_area(&self) -> Rect {
        self.panel_area
    }

    pub fn entry_at(&self, position: Position) -> Option<MobileEntry> {
        self.entry_areas
            .iter()
            .find(|(_, area)| area.contains(position))
            .map(|(entry, _)| entry.clone())
    }

    pub fn highlighted_index(&self) -> usize {
        self.highlighted
    }

    pub fn highlighted(&self) -> Option<MobileEntry> {
        entries().into_iter().nth(self.highlighted)
    }

    pub fn move_highlight(&mut self, forward: bool) {
        let len = entries().len();
        self.highlighted = if forward {
            (self.highlighted + 1) % len
        } else {
            (self.highlighted + len - 1) % len
        };
    }

    /// Activates an entry: the panel always closes, then the link is followed.
    pub fn activate(&mut self, entry: &MobileEntry, detached: bool) -> Vec<Effect> {
        self.close();
        let route = entry.route();
        if detached {
            vec![Effect::OpenDetached(route)]
        } else {
            vec![Effect::Navigate(route)]
        }
    }
}

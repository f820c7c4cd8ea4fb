use ratatui::layout::{Position, Rect};
use vassa_types::{Effect, Route};

/// Entries of the authenticated user's dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserMenuItem {
    YourProperties,
    Logout,
}

impl UserMenuItem {
    pub const ALL: [UserMenuItem; 2] = [UserMenuItem::YourProperties, UserMenuItem::Logout];

    pub fn label(self, logout_pending: bool) -> &'static str {
        match self {
            UserMenuItem::YourProperties => "Your Properties",
            UserMenuItem::Logout if logout_pending => "Logging out...",
            UserMenuItem::Logout => "Logout",
        }
    }
}

/// Open/closed state of the user dropdown plus the geometry used to decide
/// whether a pointer-down happened inside it.
///
/// The owning container is the bar's right-hand action cluster; the panel is
/// the dropdown itself. Both are refreshed on every render.
#[derive(Debug, Default, Clone)]
pub struct UserMenuState {
    open: bool,
    highlighted: usize,
    container_area: Rect,
    panel_area: Rect,
    item_areas: Vec<(UserMenuItem, Rect)>,
}

impl UserMenuState {
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
        self.item_areas.clear();
    }

    pub fn set_container_area(&mut self, area: Rect) {
        self.container_area = area;
    }

    pub fn set_panel_layout(&mut self, panel: Rect, items: Vec<(UserMenuItem, Rect)>) {
        self.panel_area = panel;
        self.item_areas = items;
    }

    pub fn panel_area(&self) -> Rect {
        self.panel_area
    }

    /// Closes the menu when `position` falls outside both the owning container
    /// and the open panel. Returns whether the menu was closed.
    pub fn on_pointer_down(&mut self, position: Position) -> bool {
        if !self.open {
            return false;
        }
        if self.container_area.contains(position) || self.panel_area.contains(position) {
            return false;
        }
        self.close();
        true
    }

    pub fn item_at(&self, position: Position) -> Option<UserMenuItem> {
        self.item_areas
            .iter()
            .find(|(_, area)| area.contains(position))
            .map(|(item, _)| *item)
    }

    pub fn highlighted(&self) -> UserMenuItem {
        UserMenuItem::ALL[self.highlighted.min(UserMenuItem::ALL.len() - 1)]
    }

    pub fn highlight(&mut self, item: UserMenuItem) {
        if let Some(index) = UserMenuItem::ALL.iter().position(|candidate| *candidate == item) {
            self.highlighted = index;
        }
    }

    pub fn move_highlight(&mut self, forward: bool) {
        let len = UserMenuItem::ALL.len();
        self.highlighted = if forward {
            (self.highlighted + 1) % len
        } else {
            (self.highlighted + len - 1) % len
        };
    }

    /// Chooses an entry. The menu always closes first.
    ///
    /// `detached` is set when the activation carried a modifier; links then
    /// open elsewhere instead of navigating in place.
    pub fn select_item(&mut self, item: UserMenuItem, detached: bool) -> Vec<Effect> {
        self.close();
        match item {
            UserMenuItem::YourProperties if detached => vec![Effect::OpenDetached(Route::YourProperties)],
            UserMenuItem::YourProperties => vec![Effect::Navigate(Route::YourProperties)],
            UserMenuItem::Logout => vec![Effect::LogoutRequested],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_menu() -> UserMenuState {
        let mut menu = UserMenuState::new();
        menu.set_container_area(Rect::new(60, 1, 20, 1));
        menu.toggle();
        menu.set_panel_layout(
            Rect::new(50, 2, 30, 8),
            vec![
                (UserMenuItem::YourProperties, Rect::new(51, 6, 28, 1)),
                (UserMenuItem::Logout, Rect::new(51, 7, 28, 1)),
            ],
        );
        menu
    }

    #[test]
    fn toggling_twice_returns_to_closed() {
        let mut menu = UserMenuState::new();
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn pointer_down_outside_closes() {
        let mut menu = open_menu();
        assert!(menu.on_pointer_down(Position::new(5, 20)));
        assert!(!menu.is_open());
        assert_eq!(menu.panel_area(), Rect::default());
    }

    #[test]
    fn pointer_down_inside_container_or_panel_is_ignored() {
        let mut menu = open_menu();
        assert!(!menu.on_pointer_down(Position::new(65, 1)));
        assert!(!menu.on_pointer_down(Position::new(55, 4)));
        assert!(menu.is_open());
    }

    #[test]
    fn pointer_down_while_closed_is_a_no_op() {
        let mut menu = UserMenuState::new();
        assert!(!menu.on_pointer_down(Position::new(0, 0)));
    }

    #[test]
    fn selecting_your_properties_closes_and_navigates() {
        let mut menu = open_menu();
        let effects = menu.select_item(UserMenuItem::YourProperties, false);
        assert_eq!(effects, vec![Effect::Navigate(Route::YourProperties)]);
        assert!(!menu.is_open());

        let mut menu = open_menu();
        let effects = menu.select_item(UserMenuItem::YourProperties, true);
        assert_eq!(effects, vec![Effect::OpenDetached(Route::YourProperties)]);
    }

    #[test]
    fn selecting_logout_closes_and_requests_logout() {
        let mut menu = open_menu();
        assert_eq!(menu.select_item(UserMenuItem::Logout, false), vec![Effect::LogoutRequested]);
        assert!(!menu.is_open());
    }

    #[test]
    fn highlight_wraps_and_hit_testing_finds_items() {
        let mut menu = open_menu();
        assert_eq!(menu.highlighted(), UserMenuItem::YourProperties);
        menu.move_highlight(false);
        assert_eq!(menu.highlighted(), UserMenuItem::Logout);
        menu.move_highlight(true);
        assert_eq!(menu.highlighted(), UserMenuItem::YourProperties);

        assert_eq!(menu.item_at(Position::new(52, 7)), Some(UserMenuItem::Logout));
        assert_eq!(menu.item_at(Position::new(52, 3)), None);
    }

    #[test]
    fn logout_label_reflects_pending() {
        assert_eq!(UserMenuItem::Logout.label(false), "Logout");
        assert_eq!(UserMenuItem::Logout.label(true), "Logging out...");
    }
}

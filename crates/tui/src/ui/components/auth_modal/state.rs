use ratatui::layout::{Position, Rect};
use vassa_types::Modal;

/// Buttons on the placeholder modal frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthModalAction {
    /// Jump to the other modal (Login <-> Register).
    Switch,
    Close,
}

/// Login and register overlays. At most one is visible.
#[derive(Debug, Default, Clone)]
pub struct AuthModalState {
    login: bool,
    register: bool,
    focused: Option<AuthModalAction>,
    action_areas: Vec<(AuthModalAction, Rect)>,
}

impl AuthModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, modal: Modal) {
        self.login = modal == Modal::Login;
        self.register = modal == Modal::Register;
        self.focused = Some(AuthModalAction::Switch);
    }

    pub fn close(&mut self) {
        self.login = false;
        self.register = false;
        self.focused = None;
        self.action_areas.clear();
    }

    /// Opens the other modal. Returns the one now shown, if any was open.
    pub fn switch(&mut self) -> Option<Modal> {
        let next = match self.active()? {
            Modal::Login => Modal::Register,
            Modal::Register => Modal::Login,
        };
        self.open(next);
        Some(next)
    }

    pub fn active(&self) -> Option<Modal> {
        match (self.login, self.register) {
            (true, _) => Some(Modal::Login),
            (false, true) => Some(Modal::Register),
            (false, false) => None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.login || self.register
    }

    pub fn is_login_open(&self) -> bool {
        self.login
    }

    pub fn is_register_open(&self) -> bool {
        self.register
    }

    pub fn focused(&self) -> Option<AuthModalAction> {
        self.focused
    }

    pub fn cycle_focus(&mut self) {
        self.focused = match self.focused {
            Some(AuthModalAction::Switch) => Some(AuthModalAction::Close),
            _ => Some(AuthModalAction::Switch),
        };
    }

    pub fn set_action_areas(&mut self, areas: Vec<(AuthModalAction, Rect)>) {
        self.action_areas = areas;
    }

    pub fn action_at(&self, position: Position) -> Option<AuthModalAction> {
        self.action_areas
            .iter()
            .find(|(_, area)| area.contains(position))
            .map(|(action, _)| *action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_one_modal_closes_the_other() {
        let mut modals = AuthModalState::new();
        modals.open(Modal::Login);
        assert!(modals.is_login_open() && !modals.is_register_open());

        modals.open(Modal::Register);
        assert!(!modals.is_login_open() && modals.is_register_open());
    }

    #[test]
    fn switch_crosses_between_modals() {
        let mut modals = AuthModalState::new();
        assert_eq!(modals.switch(), None);

        modals.open(Modal::Login);
        assert_eq!(modals.switch(), Some(Modal::Register));
        assert_eq!(modals.switch(), Some(Modal::Login));
        assert_eq!(modals.active(), Some(Modal::Login));
    }

    #[test]
    fn close_clears_both() {
        let mut modals = AuthModalState::new();
        modals.open(Modal::Register);
        modals.close();
        assert!(!modals.is_open());
        assert_eq!(modals.active(), None);
    }
}

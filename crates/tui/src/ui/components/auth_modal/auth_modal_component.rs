use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};
use vassa_types::{Effect, Modal};

use super::AuthModalAction;
use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::{self, Theme, theme_helpers as th};

#[derive(Debug, Default)]
pub struct AuthModalComponent;

impl AuthModalComponent {
    fn copy(modal: Modal) -> (&'static str, &'static str, &'static str) {
        match modal {
            Modal::Login => (
                " Login ",
                "Sign in to manage your listings and saved properties. This window closes as soon as your session is active.",
                "No account? Register",
            ),
            Modal::Register => (
                " Register ",
                "Create a free account to list properties and keep track of your enquiries.",
                "Have an account? Login",
            ),
        }
    }

    fn run_action(app: &mut App, action: AuthModalAction) -> Vec<Effect> {
        match action {
            AuthModalAction::Switch => match app.auth_modal.active() {
                Some(Modal::Login) => vec![Effect::ShowModal(Modal::Register)],
                Some(Modal::Register) => vec![Effect::ShowModal(Modal::Login)],
                None => Vec::new(),
            },
            AuthModalAction::Close => vec![Effect::CloseModal],
        }
    }
}

impl Component for AuthModalComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Esc => vec![Effect::CloseModal],
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
                app.auth_modal.cycle_focus();
                Vec::new()
            }
            KeyCode::Enter => match app.auth_modal.focused() {
                Some(action) => Self::run_action(app, action),
                None => Vec::new(),
            },
            _ => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        match app.auth_modal.action_at(Position::new(mouse.column, mouse.row)) {
            Some(action) => Self::run_action(app, action),
            None => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let Some(modal) = app.auth_modal.active() else {
            return;
        };
        let theme = theme::panel();
        let (title, body, switch_label) = Self::copy(modal);

        let block = th::block(theme, Some(title), true);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [body_area, _, buttons_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1), Constraint::Length(3)]).areas(inner);
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled(body, theme.text_primary_style())),
                Line::default(),
                Line::from(Span::styled(
                    "Vassa Properties",
                    theme.brand_style().add_modifier(Modifier::BOLD),
                )),
            ])
            .wrap(Wrap { trim: true }),
            body_area,
        );

        let [switch_area, close_area] =
            Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)]).areas(buttons_area);
        let focused = app.auth_modal.focused();
        th::render_button(
            frame,
            switch_area,
            switch_label,
            focused == Some(AuthModalAction::Switch),
            focused == Some(AuthModalAction::Switch),
            theme,
        );
        th::render_button(
            frame,
            close_area,
            "Close",
            focused == Some(AuthModalAction::Close),
            focused == Some(AuthModalAction::Close),
            theme,
        );
        app.auth_modal
            .set_action_areas(vec![(AuthModalAction::Switch, switch_area), (AuthModalAction::Close, close_area)]);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(
            theme::panel(),
            &[("Tab", " Focus  "), ("Enter", " Choose  "), ("Esc", " Close  ")],
        )
        .into_iter()
        .chain(std::iter::once(Span::styled(
            if app.auth_modal.is_login_open() { "Login" } else { "Register" },
            theme::panel().text_muted_style(),
        )))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::app_with_session;

    #[test]
    fn switch_action_requests_the_other_modal() {
        let (mut app, _) = app_with_session(None);
        app.auth_modal.open(Modal::Login);
        let effects = AuthModalComponent.handle_key_events(&mut app, KeyEvent::from(KeyCode::Enter));
        assert_eq!(effects, vec![Effect::ShowModal(Modal::Register)]);

        app.auth_modal.open(Modal::Register);
        let effects = AuthModalComponent.handle_key_events(&mut app, KeyEvent::from(KeyCode::Enter));
        assert_eq!(effects, vec![Effect::ShowModal(Modal::Login)]);
    }

    #[test]
    fn escape_and_close_button_close() {
        let (mut app, _) = app_with_session(None);
        app.auth_modal.open(Modal::Login);
        assert_eq!(
            AuthModalComponent.handle_key_events(&mut app, KeyEvent::from(KeyCode::Esc)),
            vec![Effect::CloseModal]
        );
        AuthModalComponent.handle_key_events(&mut app, KeyEvent::from(KeyCode::Tab));
        assert_eq!(
            AuthModalComponent.handle_key_events(&mut app, KeyEvent::from(KeyCode::Enter)),
            vec![Effect::CloseModal]
        );
    }
}

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::{
    prelude::*,
    widgets::{Block, Clear, Paragraph},
};
use std::time::Duration;
use vassa_types::{Effect, Modal, Msg};

use super::components::{
    AuthModalComponent, Component, MobileMenuComponent, NavBarComponent, NotificationsComponent, PageComponent,
    UserMenuComponent, user_menu,
};
use super::theme::{Theme, theme_helpers as th};
use super::utils::centered_rect;
use crate::app::{App, HINTS_HEIGHT, NAV_BAR_HEIGHT};

/// Which component receives keyboard input right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputTarget {
    AuthModal,
    UserMenu,
    MobileMenu,
    NavBar,
    Page,
}

/// Root view: bar on top, page body, hints strip, then overlays.
#[derive(Debug, Default)]
pub struct MainView {
    nav_bar_view: NavBarComponent,
    page_view: PageComponent,
    user_menu_view: UserMenuComponent,
    mobile_menu_view: MobileMenuComponent,
    auth_modal_view: AuthModalComponent,
    notifications_view: NotificationsComponent,
}

impl MainView {
    pub fn new() -> Self {
        Self::default()
    }

    fn input_target(app: &App) -> InputTarget {
        if app.auth_modal.is_open() {
            InputTarget::AuthModal
        } else if app.user_menu.is_open() {
            InputTarget::UserMenu
        } else if app.mobile_menu.is_open() {
            InputTarget::MobileMenu
        } else if app.nav_bar.container_focus.get() {
            InputTarget::NavBar
        } else {
            InputTarget::Page
        }
    }

    fn component_for(&mut self, target: InputTarget) -> &mut dyn Component {
        match target {
            InputTarget::AuthModal => &mut self.auth_modal_view,
            InputTarget::UserMenu => &mut self.user_menu_view,
            InputTarget::MobileMenu => &mut self.mobile_menu_view,
            InputTarget::NavBar => &mut self.nav_bar_view,
            InputTarget::Page => &mut self.page_view,
        }
    }

    /// Shortcuts available whenever no modal is open.
    fn handle_global_keys(app: &mut App, key: KeyEvent) -> Option<Vec<Effect>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('r') => Some(vec![Effect::ScheduleReload(Duration::ZERO)]),
                _ => None,
            };
        }
        match key.code {
            KeyCode::Char('q') => {
                app.should_quit = true;
                Some(Vec::new())
            }
            KeyCode::Char('u') if app.identity().is_authenticated() => {
                app.mobile_menu.close();
                app.user_menu.toggle();
                Some(Vec::new())
            }
            KeyCode::Char('l') if !app.identity().is_authenticated() => Some(vec![Effect::ShowModal(Modal::Login)]),
            KeyCode::Char('m') if !app.is_wide() => {
                app.user_menu.close();
                app.mobile_menu.toggle();
                Some(Vec::new())
            }
            KeyCode::Backspace => {
                let route = app.router.back().cloned()?;
                Some(app.update(&Msg::RouteChanged(route)))
            }
            _ => None,
        }
    }
}

impl Component for MainView {
    fn handle_message(&mut self, app: &mut App, msg: Msg) -> Vec<Effect> {
        app.update(&msg)
    }

    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let target = Self::input_target(app);
        if target == InputTarget::AuthModal {
            return self.auth_modal_view.handle_key_events(app, key);
        }
        // Menus own Up/Down/Enter/Esc while open; everything else falls through to the shortcuts.
        let menu_keys = matches!(
            key.code,
            KeyCode::Up | KeyCode::Down | KeyCode::Enter | KeyCode::Esc | KeyCode::Tab | KeyCode::BackTab
        );
        if matches!(target, InputTarget::UserMenu | InputTarget::MobileMenu) && menu_keys {
            return self.component_for(target).handle_key_events(app, key);
        }
        if let Some(effects) = Self::handle_global_keys(app, key) {
            return effects;
        }
        match key.code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Enter | KeyCode::Esc => self.nav_bar_view.handle_key_events(app, key),
            _ => self.page_view.handle_key_events(app, key),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let position = Position::new(mouse.column, mouse.row);
        if matches!(mouse.kind, MouseEventKind::Down(_)) {
            // Any button counts as a pointer-down for the outside-click listener.
            app.dispatch_pointer_down(position);
        }

        if app.auth_modal.is_open() {
            return self.auth_modal_view.handle_mouse_events(app, mouse);
        }
        if matches!(mouse.kind, MouseEventKind::ScrollDown | MouseEventKind::ScrollUp) {
            return self.page_view.handle_mouse_events(app, mouse);
        }
        if user_menu::panel_contains(&app.user_menu, position) {
            return self.user_menu_view.handle_mouse_events(app, mouse);
        }
        if app.mobile_menu.is_open() && app.mobile_menu.panel_area().contains(position) {
            return self.mobile_menu_view.handle_mouse_events(app, mouse);
        }
        self.nav_bar_view.handle_mouse_events(app, mouse)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let layout = self.get_preferred_layout(app, area);
        let (bar_area, page_area, hints_area) = (layout[0], layout[1], layout[2]);

        self.page_view.render(frame, page_area, app);
        self.nav_bar_view.render(frame, bar_area, app);

        if app.mobile_menu.is_open() && !app.is_wide() {
            self.mobile_menu_view.render(frame, page_area, app);
        }
        if app.user_menu.is_open() {
            self.user_menu_view.render(frame, area, app);
        }

        let hint_spans = self.get_hint_spans(app);
        let hints_widget = Paragraph::new(Line::from(hint_spans)).style(th::panel_style(super::theme::panel()));
        frame.render_widget(hints_widget, hints_area);

        if app.auth_modal.is_open() {
            render_overlay(frame);
            let modal_area = centered_rect(60, 45, area);
            frame.render_widget(Clear, modal_area);
            self.auth_modal_view.render(frame, modal_area, app);
        }

        self.notifications_view.render(frame, page_area, app);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let theme = super::theme::panel();
        let mut hint_spans: Vec<Span> = vec![Span::styled(" Hints: ", theme.text_muted_style())];
        let target = Self::input_target(app);
        hint_spans.extend(match target {
            InputTarget::AuthModal => self.auth_modal_view.get_hint_spans(app),
            InputTarget::UserMenu => self.user_menu_view.get_hint_spans(app),
            InputTarget::MobileMenu => self.mobile_menu_view.get_hint_spans(app),
            InputTarget::NavBar => self.nav_bar_view.get_hint_spans(app),
            InputTarget::Page => {
                let mut spans = self.page_view.get_hint_spans(app);
                spans.extend(self.nav_bar_view.get_hint_spans(app));
                spans
            }
        });
        if target != InputTarget::AuthModal {
            hint_spans.extend(th::build_hint_spans(theme, &[("Ctrl+R", " Reload  "), ("q", " Quit")]));
        }
        hint_spans
    }

    fn get_preferred_layout(&self, _app: &App, area: Rect) -> Vec<Rect> {
        Layout::vertical([
            Constraint::Length(NAV_BAR_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(HINTS_HEIGHT),
        ])
        .split(area)
        .to_vec()
    }
}

/// Dims everything behind a modal.
fn render_overlay(frame: &mut Frame) {
    let theme = super::theme::panel();
    frame.render_widget(Block::default().style(theme.backdrop_style()).dim(), frame.area());
}

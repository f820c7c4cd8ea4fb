use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use vassa_types::{Effect, Modal, NavTheme, Route};

use super::{NavLayoutContext, NavTarget, compute_layout, follow_link, target_label};
use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::{Theme, theme_helpers as th};

/// Renders the bar and turns activations of its targets into effects.
#[derive(Debug, Default)]
pub struct NavBarComponent;

impl NavBarComponent {
    pub fn new() -> Self {
        Self
    }

    /// Activates a bar target. `detached` is set when a modifier was held.
    pub fn activate(app: &mut App, target: &NavTarget, detached: bool) -> Vec<Effect> {
        match target {
            NavTarget::Logo => vec![follow_link(Route::Landing, detached)],
            NavTarget::Link(route) => vec![follow_link(route.clone(), detached)],
            NavTarget::ListCta => vec![follow_link(Route::List, detached)],
            NavTarget::Identity => {
                if app.identity().is_authenticated() {
                    app.mobile_menu.close();
                    app.user_menu.toggle();
                    Vec::new()
                } else {
                    vec![Effect::ShowModal(Modal::Login)]
                }
            }
            NavTarget::MobileToggle => {
                app.user_menu.close();
                app.mobile_menu.toggle();
                Vec::new()
            }
        }
    }

    fn target_style(app: &App, target: &NavTarget, focused: bool) -> Style {
        let theme = app.theme();
        match target {
            NavTarget::Logo => {
                let style = theme.brand_mark_style();
                if focused { style.add_modifier(Modifier::UNDERLINED) } else { style }
            }
            NavTarget::Link(route) => th::link_style(theme, route == app.current_route(), focused),
            NavTarget::ListCta => th::button_primary_style(theme, focused),
            NavTarget::Identity if app.identity().is_authenticated() => {
                let style = theme.highlight_style();
                if focused || app.user_menu.is_open() {
                    theme.selection_style().add_modifier(Modifier::BOLD)
                } else {
                    style
                }
            }
            NavTarget::Identity => th::button_secondary_style(theme, true, focused),
            NavTarget::MobileToggle => th::button_secondary_style(theme, true, focused || app.mobile_menu.is_open()),
        }
    }
}

impl Component for NavBarComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Tab => {
                app.nav_bar.cycle_focus(true);
                Vec::new()
            }
            KeyCode::BackTab => {
                app.nav_bar.cycle_focus(false);
                Vec::new()
            }
            KeyCode::Enter => {
                let Some(target) = app.nav_bar.focused_target() else {
                    return Vec::new();
                };
                let detached = key.modifiers.intersects(KeyModifiers::ALT | KeyModifiers::CONTROL);
                Self::activate(app, &target, detached)
            }
            KeyCode::Esc => {
                app.nav_bar.clear_focus();
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let Some(target) = app.nav_bar.target_at(mouse.column, mouse.row) else {
            return Vec::new();
        };
        let detached = mouse
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SHIFT);
        Self::activate(app, &target, detached)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = app.theme();
        let mut block = Block::default().style(th::bar_style(theme));
        if app.nav_theme() == NavTheme::Opaque {
            block = block.borders(Borders::BOTTOM).border_style(theme.border_style(false));
        }
        frame.render_widget(block, area);

        let identity = app.identity();
        let context = NavLayoutContext {
            identity: &identity,
            mobile_menu_open: app.mobile_menu.is_open(),
            mobile_breakpoint: app.ctx.config.mobile_breakpoint,
            compact_breakpoint: app.ctx.config.compact_breakpoint,
        };
        let layout = compute_layout(area, &context);
        app.nav_bar.set_layout(area, layout);
        app.user_menu.set_container_area(app.nav_bar.action_cluster_area());

        let focused = app.nav_bar.focused_target();
        for (target, rect) in app.nav_bar.targets.clone() {
            let label = target_label(&target, &context, area.width);
            let style = Self::target_style(app, &target, focused.as_ref() == Some(&target));
            frame.render_widget(Paragraph::new(Line::from(Span::styled(label, style))), rect);
        }
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let theme = app.theme();
        let mut hints = vec![("Tab", " Focus  "), ("Enter", " Open  "), ("Alt+Enter", " Copy link  ")];
        if app.identity().is_authenticated() {
            hints.push(("u", " Account  "));
        } else {
            hints.push(("l", " Login  "));
        }
        if !app.is_wide() {
            hints.push(("m", " Menu  "));
        }
        th::build_hint_spans(theme, &hints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::app_with_session;
    use vassa_types::SessionRecord;

    #[test]
    fn identity_opens_login_when_anonymous() {
        let (mut app, _) = app_with_session(None);
        let effects = NavBarComponent::activate(&mut app, &NavTarget::Identity, false);
        assert_eq!(effects, vec![Effect::ShowModal(Modal::Login)]);
        assert!(!app.user_menu.is_open());
    }

    #[test]
    fn identity_toggles_the_user_menu_when_authenticated() {
        let (mut app, _) = app_with_session(Some(SessionRecord::for_user("Asha")));
        assert!(NavBarComponent::activate(&mut app, &NavTarget::Identity, false).is_empty());
        assert!(app.user_menu.is_open());
        NavBarComponent::activate(&mut app, &NavTarget::Identity, false);
        assert!(!app.user_menu.is_open());
    }

    #[test]
    fn logo_and_cta_route_home_and_to_listing() {
        let (mut app, _) = app_with_session(None);
        assert_eq!(
            NavBarComponent::activate(&mut app, &NavTarget::Logo, false),
            vec![Effect::Navigate(Route::Landing)]
        );
        assert_eq!(
            NavBarComponent::activate(&mut app, &NavTarget::ListCta, false),
            vec![Effect::Navigate(Route::List)]
        );
        assert_eq!(
            NavBarComponent::activate(&mut app, &NavTarget::Link(Route::About), true),
            vec![Effect::OpenDetached(Route::About)]
        );
    }

    #[test]
    fn mobile_toggle_flips_the_panel() {
        let (mut app, _) = app_with_session(None);
        NavBarComponent::activate(&mut app, &NavTarget::MobileToggle, false);
        assert!(app.mobile_menu.is_open());
        NavBarComponent::activate(&mut app, &NavTarget::MobileToggle, false);
        assert!(!app.mobile_menu.is_open());
    }
}

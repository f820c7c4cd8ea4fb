use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;
use vassa_types::Effect;

use super::{UserMenuItem, UserMenuState};
use crate::app::App;
use crate::ui::components::Component;
use crate::ui::components::nav_bar::NavTarget;
use crate::ui::theme::{self, Theme, theme_helpers as th};
use crate::ui::utils::{anchored_below, truncate_to_width};

const MIN_PANEL_WIDTH: u16 = 28;
const MAX_PANEL_WIDTH: u16 = 44;

/// Dropdown panel anchored under the identity button.
#[derive(Debug, Default)]
pub struct UserMenuComponent;

impl UserMenuComponent {
    fn select(app: &mut App, item: UserMenuItem, detached: bool) -> Vec<Effect> {
        app.user_menu.highlight(item);
        app.user_menu.select_item(item, detached)
    }
}

impl Component for UserMenuComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Up | KeyCode::BackTab => app.user_menu.move_highlight(false),
            KeyCode::Down | KeyCode::Tab => app.user_menu.move_highlight(true),
            KeyCode::Enter => {
                let item = app.user_menu.highlighted();
                let detached = key.modifiers.intersects(KeyModifiers::ALT | KeyModifiers::CONTROL);
                return Self::select(app, item, detached);
            }
            KeyCode::Esc | KeyCode::Char('u') => app.user_menu.close(),
            _ => {}
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let Some(item) = app.user_menu.item_at(Position::new(mouse.column, mouse.row)) else {
            return Vec::new();
        };
        let detached = mouse
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SHIFT);
        Self::select(app, item, detached)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let identity = app.identity();
        let Some(name) = identity.name() else {
            return;
        };
        let Some(anchor) = app.nav_bar.area_of(&NavTarget::Identity) else {
            return;
        };
        let theme = theme::panel();
        let logout_pending = app.logout.is_pending();

        let details = identity.detail_rows();
        let widest = details
            .iter()
            .map(|(_, value)| value.width() + 4)
            .chain(std::iter::once(name.width() + 2))
            .max()
            .unwrap_or_default() as u16;
        let width = (widest + 4).clamp(MIN_PANEL_WIDTH, MAX_PANEL_WIDTH);
        // name, details, separator, items, plus borders
        let height = 1 + details.len() as u16 + 1 + UserMenuItem::ALL.len() as u16 + 2;
        let panel = anchored_below(anchor, width, height, area);

        let block = th::block(theme, None, true);
        let inner = block.inner(panel);
        let text_width = inner.width.saturating_sub(2);

        let mut lines = vec![Line::from(Span::styled(
            format!(" {}", truncate_to_width(name, text_width)),
            theme.text_primary_style().add_modifier(Modifier::BOLD),
        ))];
        for (kind, value) in &details {
            lines.push(Line::from(vec![
                Span::styled(format!(" {} ", kind.icon()), theme.brand_style()),
                Span::styled(truncate_to_width(value, text_width.saturating_sub(3)), theme.text_secondary_style()),
            ]));
        }
        lines.push(Line::from(Span::styled(
            "─".repeat(inner.width as usize),
            theme.border_style(false),
        )));

        let first_item_row = inner.y + lines.len() as u16;
        let highlighted = app.user_menu.highlighted();
        let mut item_areas = Vec::with_capacity(UserMenuItem::ALL.len());
        for (index, item) in UserMenuItem::ALL.into_iter().enumerate() {
            let style = if item == highlighted {
                theme.selection_style().add_modifier(Modifier::BOLD)
            } else if item == UserMenuItem::Logout {
                theme.danger_style()
            } else {
                theme.text_primary_style()
            };
            lines.push(Line::from(Span::styled(format!(" {}", item.label(logout_pending)), style)));
            let row = first_item_row + index as u16;
            if row < inner.bottom() {
                item_areas.push((item, Rect::new(inner.x, row, inner.width, 1)));
            }
        }

        frame.render_widget(Clear, panel);
        frame.render_widget(Paragraph::new(lines).block(block), panel);
        app.user_menu.set_panel_layout(panel, item_areas);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(
            app.theme(),
            &[("↑/↓", " Select  "), ("Enter", " Choose  "), ("Esc", " Close  ")],
        )
    }
}

/// Whether a pointer position lands on the open panel.
pub(crate) fn panel_contains(menu: &UserMenuState, position: Position) -> bool {
    menu.is_open() && menu.panel_area().contains(position)
}

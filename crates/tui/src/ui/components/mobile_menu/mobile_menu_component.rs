use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Borders, Clear, Paragraph},
};
use vassa_types::Effect;

use super::{MobileEntry, entries};
use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::{self, Theme, theme_helpers as th};

/// Full-width panel dropped under the bar, one entry per row.
#[derive(Debug, Default)]
pub struct MobileMenuComponent;

impl Component for MobileMenuComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Up | KeyCode::BackTab => app.mobile_menu.move_highlight(false),
            KeyCode::Down | KeyCode::Tab => app.mobile_menu.move_highlight(true),
            KeyCode::Enter => {
                if let Some(entry) = app.mobile_menu.highlighted() {
                    let detached = key.modifiers.intersects(KeyModifiers::ALT | KeyModifiers::CONTROL);
                    return app.mobile_menu.activate(&entry, detached);
                }
            }
            KeyCode::Esc | KeyCode::Char('m') => app.mobile_menu.close(),
            _ => {}
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let Some(entry) = app.mobile_menu.entry_at(Position::new(mouse.column, mouse.row)) else {
            return Vec::new();
        };
        let detached = mouse
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SHIFT);
        app.mobile_menu.activate(&entry, detached)
    }

    /// `area` is the region below the bar; the panel takes as many rows as it needs from its top.
    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = theme::panel();
        let entries = entries();
        let height = (entries.len() as u16 + 1).min(area.height);
        let panel = Rect::new(area.x, area.y, area.width, height);
        let block = th::block(theme, None, false).borders(Borders::BOTTOM);
        let inner = block.inner(panel);

        let highlighted = app.mobile_menu.highlighted_index();
        let current = app.current_route().clone();
        let mut lines = Vec::with_capacity(entries.len());
        let mut entry_areas = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            let style = match &entry {
                _ if index == highlighted => theme.selection_style().add_modifier(Modifier::BOLD),
                MobileEntry::ListCta => th::button_primary_style(theme, false),
                MobileEntry::Link(route) => th::link_style(theme, *route == current, false),
            };
            lines.push(Line::from(Span::styled(format!("  {}  ", entry.label()), style)));
            let row = inner.y + index as u16;
            if row < inner.bottom() {
                entry_areas.push((entry, Rect::new(inner.x, row, inner.width, 1)));
            }
        }

        frame.render_widget(Clear, panel);
        frame.render_widget(Paragraph::new(lines).block(block), panel);
        app.mobile_menu.set_layout(panel, entry_areas);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(
            app.theme(),
            &[("↑/↓", " Select  "), ("Enter", " Go  "), ("Esc", " Close  ")],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::app_with_session;
    use ratatui::{Terminal, backend::TestBackend};
    use vassa_types::{Msg, Route};

    #[test]
    fn clicking_an_entry_navigates_and_closes() {
        let (mut app, _) = app_with_session(None);
        app.update(&Msg::Resize(80, 30));
        app.mobile_menu.toggle();

        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal
            .draw(|frame| MobileMenuComponent.render(frame, Rect::new(0, 3, 80, 26), &mut app))
            .unwrap();

        // Second row is "Find Property".
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 4,
            row: 4,
            modifiers: KeyModifiers::NONE,
        };
        let effects = MobileMenuComponent.handle_mouse_events(&mut app, click);
        assert_eq!(effects, vec![Effect::Navigate(Route::FindHome)]);
        assert!(!app.mobile_menu.is_open());
    }

    #[test]
    fn enter_activates_the_highlighted_entry() {
        let (mut app, _) = app_with_session(None);
        app.mobile_menu.toggle();
        MobileMenuComponent.handle_key_events(&mut app, KeyEvent::from(KeyCode::Up));
        let effects = MobileMenuComponent.handle_key_events(&mut app, KeyEvent::from(KeyCode::Enter));
        assert_eq!(effects, vec![Effect::Navigate(Route::List)]);
        assert!(!app.mobile_menu.is_open());
    }
}

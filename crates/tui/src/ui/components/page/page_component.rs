use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};
use vassa_types::{Effect, NavTheme};

use super::{LineKind, page_lines};
use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::{self, Theme};

/// Rows moved per wheel notch.
const WHEEL_STEP: i32 = 3;

/// Scrollable body of the current route. Scrolling feeds the bar's scroll theme.
#[derive(Debug, Default)]
pub struct PageComponent;

impl PageComponent {
    fn scrolled(app: &mut App, moved: bool) -> Vec<Effect> {
        if moved { app.on_page_scrolled() } else { Vec::new() }
    }
}

impl Component for PageComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let moved = match key.code {
            KeyCode::Down | KeyCode::Char('j') => app.page.scroll_lines(1),
            KeyCode::Up | KeyCode::Char('k') => app.page.scroll_lines(-1),
            KeyCode::PageDown | KeyCode::Char(' ') => app.page.scroll_pages(1),
            KeyCode::PageUp => app.page.scroll_pages(-1),
            KeyCode::Home => app.page.scroll_to_top(),
            KeyCode::End => app.page.scroll_to_bottom(),
            _ => false,
        };
        Self::scrolled(app, moved)
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let moved = match mouse.kind {
            MouseEventKind::ScrollDown => app.page.scroll_lines(WHEEL_STEP),
            MouseEventKind::ScrollUp => app.page.scroll_lines(-WHEEL_STEP),
            _ => false,
        };
        Self::scrolled(app, moved)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let lines = page_lines(app.current_route());
        let viewport_moved = app.page.update_viewport_height(u32::from(area.height));
        let content_moved = app.page.update_content_height(lines.len() as u32);
        if viewport_moved || content_moved {
            app.on_page_scrolled();
        }

        let hero = theme::for_nav(NavTheme::Transparent).roles().clone();
        let surface = theme::panel();
        let background = Style::default().bg(surface.roles().background).fg(surface.roles().text);
        let offset = app.page.offset() as usize;

        let visible: Vec<Line> = lines
            .iter()
            .skip(offset)
            .take(area.height as usize)
            .map(|line| match line.kind {
                LineKind::Hero => Line::from(Span::styled(
                    line.text.clone(),
                    Style::default().fg(hero.text).add_modifier(Modifier::BOLD),
                ))
                .alignment(Alignment::Center)
                .style(Style::default().bg(hero.background)),
                LineKind::Heading => Line::from(Span::styled(
                    format!("  {}", line.text),
                    surface.brand_style().add_modifier(Modifier::BOLD),
                )),
                LineKind::Body => Line::from(Span::styled(format!("  {}", line.text), surface.text_secondary_style())),
                LineKind::Blank => Line::default(),
            })
            .collect();
        frame.render_widget(Paragraph::new(visible).style(background), area);

        if app.page.is_scrollable() {
            let mut scrollbar_state = ScrollbarState::new(app.page.max_offset() as usize).position(offset);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight).thumb_style(surface.brand_style()),
                area,
                &mut scrollbar_state,
            );
        }
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        crate::ui::theme::theme_helpers::build_hint_spans(app.theme(), &[("↑/↓ PgUp/PgDn", " Scroll  ")])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::app_with_session;
    use crossterm::event::KeyModifiers;

    #[test]
    fn wheel_scrolling_past_the_threshold_flips_the_theme() {
        let (mut app, _) = app_with_session(None);
        let wheel = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 10,
            row: 10,
            modifiers: KeyModifiers::NONE,
        };
        for _ in 0..17 {
            PageComponent.handle_mouse_events(&mut app, wheel);
        }
        assert_eq!(app.page.offset(), 51);
        assert_eq!(app.nav_theme(), NavTheme::Opaque);

        PageComponent.handle_key_events(&mut app, KeyEvent::from(KeyCode::Home));
        assert_eq!(app.nav_theme(), NavTheme::Transparent);
    }
}

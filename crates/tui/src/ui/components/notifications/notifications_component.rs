use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;
use vassa_types::NotificationLevel;

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::{self, Theme, theme_helpers as th};
use crate::ui::utils::truncate_to_width;

const TOAST_MAX_WIDTH: u16 = 48;
const TOAST_HEIGHT: u16 = 3;

/// Stacks live toasts from the top-right corner of `area`, newest last.
#[derive(Debug, Default)]
pub struct NotificationsComponent;

impl Component for NotificationsComponent {
    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = theme::panel();
        let mut y = area.y;
        for toast in app.notifications.toasts() {
            if y + TOAST_HEIGHT > area.bottom() {
                break;
            }
            let level = toast.notification.level;
            let icon = match level {
                NotificationLevel::Success => "✔",
                NotificationLevel::Error => "✖",
                NotificationLevel::Info => "ℹ",
            };
            let level_style = theme.notification_style(level);
            let text = format!("{icon} {}", toast.notification.message);
            let width = (text.width() as u16 + 4).min(TOAST_MAX_WIDTH).min(area.width);
            let rect = Rect::new(area.right().saturating_sub(width + 1), y, width, TOAST_HEIGHT);

            let block = Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(level_style)
                .title_bottom(Line::from(Span::styled(
                    toast.shown_at.format(" %H:%M:%S ").to_string(),
                    theme.text_muted_style(),
                )))
                .style(th::panel_style(theme));
            let line = Line::from(Span::styled(
                truncate_to_width(&text, width.saturating_sub(2)),
                level_style,
            ));
            frame.render_widget(Clear, rect);
            frame.render_widget(Paragraph::new(line).block(block), rect);
            y += TOAST_HEIGHT;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::app_with_session;
    use ratatui::{Terminal, backend::TestBackend, layout::Position};
    use vassa_types::Notification;

    #[test]
    fn toasts_render_in_the_top_right() {
        let (mut app, _) = app_with_session(None);
        app.notifications.push(Notification::success("Logged out successfully!"));

        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal
            .draw(|frame| NotificationsComponent.render(frame, frame.area(), &mut app))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        let first_rows: String = (0..3u16)
            .flat_map(|y| (0..80u16).map(move |x| Position::new(x, y)))
            .map(|position| buffer[position].symbol().to_string())
            .collect();
        assert!(first_rows.contains("Logged out successfully!"));
        assert_eq!(buffer[Position::new(0, 1)].symbol(), " ");
    }
}

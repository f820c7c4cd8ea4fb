//! Colour roles shared by both bar variants and the floating panels.

use std::fmt::Debug;

use ratatui::style::{Color, Modifier, Style};
use vassa_types::NotificationLevel;

/// Palette slots a variant has to fill.
#[derive(Debug, Clone)]
pub struct ThemeRoles {
    /// Behind the page body.
    pub background: Color,
    /// Bar fill; equal to `background` when the bar is see-through.
    pub surface: Color,
    pub border: Color,

    pub text: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    /// Maroon: logo block, call-to-action fill, headings.
    pub brand: Color,
    /// Yellow: active link, key hints, focused call-to-action text.
    pub highlight: Color,

    pub notice_info: Color,
    pub notice_success: Color,
    pub notice_error: Color,

    pub selection_bg: Color,
    pub selection_fg: Color,
    pub focus: Color,

    /// Dimmed layer painted under an open modal.
    pub backdrop: Color,
}

/// A bar or panel palette plus the styles built from it.
pub trait Theme: Send + Sync + Debug {
    fn roles(&self) -> &ThemeRoles;

    fn text_primary_style(&self) -> Style {
        Style::default().fg(self.roles().text)
    }

    fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.roles().text_secondary)
    }

    fn text_muted_style(&self) -> Style {
        Style::default().fg(self.roles().text_muted)
    }

    fn border_style(&self, focused: bool) -> Style {
        let roles = self.roles();
        Style::default().fg(if focused { roles.focus } else { roles.border })
    }

    fn selection_style(&self) -> Style {
        let roles = self.roles();
        Style::default().fg(roles.selection_fg).bg(roles.selection_bg)
    }

    fn backdrop_style(&self) -> Style {
        Style::default().bg(self.roles().backdrop)
    }

    fn brand_style(&self) -> Style {
        Style::default().fg(self.roles().brand)
    }

    fn highlight_style(&self) -> Style {
        Style::default().fg(self.roles().highlight).add_modifier(Modifier::BOLD)
    }

    /// White wordmark on the maroon block.
    fn brand_mark_style(&self) -> Style {
        Style::default()
            .bg(self.roles().brand)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    /// Destructive actions such as logout.
    fn danger_style(&self) -> Style {
        Style::default().fg(self.roles().notice_error)
    }

    /// Border and text colour of a toast.
    fn notification_style(&self, level: NotificationLevel) -> Style {
        let roles = self.roles();
        let color = match level {
            NotificationLevel::Success => roles.notice_success,
            NotificationLevel::Error => roles.notice_error,
            NotificationLevel::Info => roles.notice_info,
        };
        Style::default().fg(color)
    }
}

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};

use super::roles::{Theme, ThemeRoles};

/// Build a standard Block with theme surfaces and borders.
pub fn block<'a, T: Theme + ?Sized>(theme: &'a T, title: Option<&'a str>, focused: bool) -> Block<'a> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style(focused))
        .style(panel_style(theme));
    if let Some(t) = title {
        block = block.title(Span::styled(t, theme.text_secondary_style().add_modifier(Modifier::BOLD)));
    }
    block
}

/// Style for panel-like containers (set background on widget using `.style`).
pub fn panel_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { surface, text, .. } = *theme.roles();
    Style::default().bg(surface).fg(text)
}

/// Style for the bar row itself.
pub fn bar_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { background, surface, text, .. } = *theme.roles();
    // The hero bar has no surface of its own; it paints the page backdrop.
    let bg = if surface == background { background } else { surface };
    Style::default().bg(bg).fg(text)
}

/// Style for a navigation link, highlighting the active route and keyboard focus.
pub fn link_style<T: Theme + ?Sized>(theme: &T, active: bool, focused: bool) -> Style {
    let mut style = if active {
        theme.highlight_style()
    } else {
        theme.text_primary_style()
    };
    if focused {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    style
}

/// Filled maroon call-to-action button.
pub fn button_primary_style<T: Theme + ?Sized>(theme: &T, focused: bool) -> Style {
    let style = theme.brand_mark_style();
    if focused { style.fg(theme.roles().highlight) } else { style }
}

/// Outline-like button; relies on the bar's background.
pub fn button_secondary_style<T: Theme + ?Sized>(theme: &T, enabled: bool, selected: bool) -> Style {
    if !enabled {
        return theme.text_muted_style();
    }
    let style = theme.text_primary_style().add_modifier(Modifier::BOLD);
    if selected { theme.selection_style().add_modifier(Modifier::BOLD) } else { style }
}

/// Renders a bordered, centered button.
pub fn render_button<T: Theme + ?Sized>(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    is_focused: bool,
    is_selected: bool,
    theme: &T,
) {
    frame.render_widget(
        Paragraph::new(label)
            .centered()
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(theme.border_style(is_focused))
                    .padding(Padding::horizontal(1)),
            )
            .style(button_secondary_style(theme, true, is_selected)),
        area,
    );
}

/// Alternating key/description spans for the hints bar.
pub fn build_hint_spans<T: Theme + ?Sized>(theme: &T, hints: &[(&str, &str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, description) in hints {
        spans.push(Span::styled(key.to_string(), theme.highlight_style()));
        spans.push(Span::styled(description.to_string(), theme.text_muted_style()));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::{HeroTheme, SurfaceTheme};

    #[test]
    fn hint_spans_alternate_key_and_description() {
        let theme = SurfaceTheme::new();
        let spans = build_hint_spans(&theme, &[("Tab", " Focus  "), ("q", " Quit")]);
        let text: Vec<&str> = spans.iter().map(|span| span.content.as_ref()).collect();
        assert_eq!(text, vec!["Tab", " Focus  ", "q", " Quit"]);
    }

    #[test]
    fn active_link_uses_the_accent() {
        let theme = HeroTheme::new();
        assert_eq!(link_style(&theme, true, false).fg, Some(theme.roles().highlight));
        assert_eq!(link_style(&theme, false, false).fg, Some(theme.roles().text));
    }
}

//! # Text Decorations
//!
//! Named decoration functions for every piece of styled text in the picker.
//! Each takes plain text and returns a styled [`Span`]; rendering code never
//! builds a [`Style`] itself.

use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

/// Accent used for the active category label.
const ACCENT: Color = Color::Rgb(0, 175, 255);

/// Frame title.
pub fn title(text: &str) -> Span<'static> {
    Span::styled(
        text.to_string(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )
}

/// The category currently shown.
pub fn category_active(text: &str) -> Span<'static> {
    Span::styled(
        text.to_string(),
        Style::default()
            .fg(ACCENT)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    )
}

/// Neighbouring category labels and other de-emphasised text.
pub fn category_inactive(text: &str) -> Span<'static> {
    Span::styled(text.to_string(), Style::default().add_modifier(Modifier::DIM))
}

/// The highlighted recipe in the list and in the description panel.
pub fn recipe_active(text: &str) -> Span<'static> {
    Span::styled(
        text.to_string(),
        Style::default()
            .fg(Color::LightGreen)
            .add_modifier(Modifier::BOLD),
    )
}

pub fn recipe_inactive(text: &str) -> Span<'static> {
    Span::styled(text.to_string(), Style::default().fg(Color::Gray))
}

/// Key binding hints.
pub fn control(text: &str) -> Span<'static> {
    Span::styled(
        text.to_string(),
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )
}

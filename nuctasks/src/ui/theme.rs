//! Theme and styling constants for the TUI.

use ratatui::style::{Color, Modifier, Style};

/// Primary foreground color.
pub const FG_PRIMARY: Color = Color::White;

/// Secondary foreground color (dimmed text).
pub const FG_SECONDARY: Color = Color::Gray;

/// Highlight color for focused elements.
pub const HIGHLIGHT: Color = Color::Cyan;

/// Color for the add action hint.
pub const ADD: Color = Color::Blue;

/// Color for validation errors and destructive actions.
pub const ERROR: Color = Color::Red;

/// Title color.
pub const TITLE: Color = Color::Green;

/// Normal text style.
#[must_use]
pub fn normal() -> Style {
    Style::default().fg(FG_PRIMARY)
}

/// Dimmed text style (placeholder, hints).
#[must_use]
pub fn dimmed() -> Style {
    Style::default().fg(FG_SECONDARY)
}

/// Highlighted text style (focused panel borders).
#[must_use]
pub fn highlighted() -> Style {
    Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD)
}

/// Selected item style (in lists).
#[must_use]
pub fn selected() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}

/// Border style for a panel depending on focus.
#[must_use]
pub fn border(is_focused: bool) -> Style {
    if is_focused { highlighted() } else { normal() }
}

/// Style for the validation error line.
#[must_use]
pub fn error() -> Style {
    Style::default().fg(ERROR)
}

/// Style for action labels ("Agregar", "Borrar", ...).
#[must_use]
pub fn action(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Style for the input cursor (bright white, bold).
#[must_use]
pub fn input_cursor() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Style for the status bar background (dark background with white foreground).
#[must_use]
pub fn status_bar_bg() -> Style {
    Style::default().fg(Color::White).bg(Color::Rgb(30, 30, 50))
}

/// Style for the application title.
#[must_use]
pub fn title() -> Style {
    Style::default().fg(TITLE).add_modifier(Modifier::BOLD)
}

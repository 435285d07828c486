//! Input box and validation message rendering.

use nuctasks_core::copy;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::theme;
use crate::app::{App, PanelFocus, byte_index};

/// Render the input box with the current draft.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == PanelFocus::Input;
    let draft = app.state().draft;

    let input_line = if draft.is_empty() {
        let mut spans = Vec::with_capacity(2);
        if is_focused {
            spans.push(Span::styled("█", theme::input_cursor()));
        }
        spans.push(Span::styled(copy::INPUT_PLACEHOLDER, theme::dimmed()));
        Line::from(spans)
    } else if is_focused {
        let split = byte_index(draft, app.cursor_position);
        let (before, after) = draft.split_at(split);
        Line::from(vec![
            Span::styled(before, theme::normal()),
            Span::styled("█", theme::input_cursor()),
            Span::styled(after, theme::normal()),
        ])
    } else {
        Line::from(Span::styled(draft, theme::normal()))
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border(is_focused))
        .title_bottom(Line::from(vec![
            Span::raw(" Enter: "),
            Span::styled(copy::ADD_LABEL, theme::action(theme::ADD)),
            Span::raw(" "),
        ]));

    frame.render_widget(Paragraph::new(input_line).block(block), area);
}

/// Render the validation message below the input, if there is one.
pub fn render_error(frame: &mut Frame, area: Rect, app: &App) {
    if let Some(message) = app.state().error_message() {
        frame.render_widget(Paragraph::new(message).style(theme::error()), area);
    }
}

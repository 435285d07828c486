//! Task list rendering.

use nuctasks_core::copy;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::theme;
use crate::app::{App, PanelFocus};

/// Render the task list, one row per task with its delete action.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == PanelFocus::Tasks;
    let tasks = app.state().tasks;

    let items: Vec<ListItem> = tasks
        .iter()
        .map(|task| {
            ListItem::new(Line::from(vec![
                Span::styled(task.as_str(), theme::normal()),
                Span::raw("  "),
                Span::styled(format!("[{}]", copy::DELETE_LABEL), theme::action(theme::ERROR)),
            ]))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border(is_focused));

    let list = List::new(items).block(block).highlight_style(if is_focused {
        theme::selected()
    } else {
        theme::normal()
    });

    let mut state = ListState::default();
    if !tasks.is_empty() {
        state.select(Some(app.selected_task));
    }

    frame.render_stateful_widget(list, area, &mut state);
}

/// Render the clear-all action. Only drawn while the list is non-empty.
pub fn render_clear_all(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled("C: ", theme::dimmed()),
        Span::styled(copy::CLEAR_ALL_LABEL, theme::action(theme::ERROR)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

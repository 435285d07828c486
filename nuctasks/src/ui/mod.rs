//! Terminal UI rendering.

pub mod input_panel;
pub mod status_bar;
pub mod task_panel;
pub mod theme;

use nuctasks_core::copy;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    widgets::Paragraph,
};

use crate::app::App;

/// Main draw function for the entire UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let state = app.state();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Input
            Constraint::Length(1), // Error
            Constraint::Min(3),    // Tasks
            Constraint::Length(u16::from(state.can_clear())), // Clear all
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let title = Paragraph::new(copy::TITLE)
        .style(theme::title())
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    input_panel::render(frame, chunks[1], app);
    input_panel::render_error(frame, chunks[2], app);
    task_panel::render(frame, chunks[3], app);
    if state.can_clear() {
        task_panel::render_clear_all(frame, chunks[4]);
    }

    status_bar::render(frame, chunks[5], app);
}

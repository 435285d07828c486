//! Status bar rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::theme;
use crate::app::{App, PanelFocus};

/// Render the status bar at the bottom of the screen.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let count = app.state().tasks.len();

    let mut spans = vec![
        Span::styled(concat!("Nuctasks v", env!("CARGO_PKG_VERSION")), theme::normal()),
        Span::raw(" | "),
        Span::raw(format!("{count} ")),
        Span::raw(if count == 1 { "tarea" } else { "tareas" }),
    ];

    if app.show_help {
        let help_text = match app.focus {
            PanelFocus::Input => "Enter: agregar | Tab: lista | Esc: salir | ←→: mover cursor",
            PanelFocus::Tasks => {
                "Tab: entrada | ↑↓/jk: navegar | d: borrar | C: borrar todas | Esc: salir"
            }
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(help_text, theme::dimmed()));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(theme::status_bar_bg());
    frame.render_widget(paragraph, area);
}

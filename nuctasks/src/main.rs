//! `Nuctasks`: terminal single-page task list.
//!
//! Type a task and press Enter to add it; Tab moves to the list where tasks
//! can be deleted one by one or all at once. Nothing is persisted.
//! Configuration via CLI flags, environment variables, or config file
//! (`~/.config/nuctasks/config.toml`).
//!
//! ```bash
//! cargo run --bin nuctasks
//!
//! # Verbose logs to a custom file
//! cargo run --bin nuctasks -- --log-level debug --log-file /tmp/nuctasks.log
//! ```

use std::io;
use std::path::Path;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_appender::non_blocking::WorkerGuard;

use nuctasks::app::App;
use nuctasks::config::{CliArgs, ClientConfig};
use nuctasks::ui;

fn main() -> io::Result<()> {
    let cli = CliArgs::parse();

    // Load and resolve configuration (CLI args > env > config file > defaults).
    let config = match ClientConfig::load(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Warning: failed to load config file: {e}");
            ClientConfig::default()
        }
    };

    // Initialize logging before terminal setup (logs go to file, not stdout).
    let _log_guard = init_logging(&cli.log_level, cli.log_file.as_deref());

    tracing::info!("nuctasks starting");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &config);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("nuctasks exiting");
    result
}

/// Initialize file-based logging.
///
/// Logs are written to a file (never stdout, since ratatui owns the terminal).
/// Returns a [`WorkerGuard`] that must be held until shutdown to ensure all
/// buffered log entries are flushed.
fn init_logging(level: &str, file_path: Option<&Path>) -> Option<WorkerGuard> {
    let default_path = std::env::temp_dir().join("nuctasks.log");
    let log_path = file_path.unwrap_or(&default_path);

    let log_dir = log_path.parent()?;
    let file_name = log_path.file_name()?.to_str()?;

    let file_appender = tracing_appender::rolling::never(log_dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(env_filter)
        .with_ansi(false)
        .init();

    Some(guard)
}

/// Main application loop.
///
/// Draws only when the task list or the view state changed since the last
/// frame.
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &ClientConfig,
) -> io::Result<()> {
    let mut app = App::new().with_help(config.show_help);

    app.controller_mut().subscribe(|state| {
        tracing::trace!(
            tasks = state.tasks.len(),
            draft_len = state.draft.chars().count(),
            error = ?state.error,
            "task list changed"
        );
    });

    loop {
        if app.needs_redraw() {
            terminal.draw(|frame| ui::draw(frame, &app))?;
            app.mark_rendered();
        }

        if event::poll(config.poll_timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key_event(key),
                Event::Resize(..) => app.request_redraw(),
                _ => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

//! Application state and event handling.
//!
//! `App` is the view side of the task list: it owns a
//! [`TaskListController`] and translates key presses into its operations,
//! keeping only what the controller does not care about (focus, cursor,
//! selected row).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use nuctasks_core::{TaskListController, TaskListState};

/// Which panel is currently focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    /// Input box is focused (default).
    Input,
    /// Task list is focused.
    Tasks,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    /// Task list, draft and validation error.
    tasks: TaskListController,
    /// Cursor position in the draft (character index).
    pub cursor_position: usize,
    /// Which panel is focused.
    pub focus: PanelFocus,
    /// Selected row in the task list.
    pub selected_task: usize,
    /// Whether the status bar shows key help.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Bumped whenever view-only state changes.
    view_revision: u64,
    /// Controller and view revisions of the last drawn frame.
    rendered: Option<(u64, u64)>,
}

impl App {
    /// Create an application with an empty task list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tasks: TaskListController::new(),
            cursor_position: 0,
            focus: PanelFocus::Input,
            selected_task: 0,
            show_help: true,
            should_quit: false,
            view_revision: 0,
            rendered: None,
        }
    }

    /// Set whether the status bar shows key help.
    #[must_use]
    pub fn with_help(mut self, show_help: bool) -> Self {
        self.show_help = show_help;
        self
    }

    /// Current task list state.
    #[must_use]
    pub fn state(&self) -> TaskListState<'_> {
        self.tasks.state()
    }

    /// The underlying controller.
    #[must_use]
    pub const fn controller(&self) -> &TaskListController {
        &self.tasks
    }

    /// Mutable access to the controller, e.g. to subscribe observers.
    pub const fn controller_mut(&mut self) -> &mut TaskListController {
        &mut self.tasks
    }

    /// Whether anything changed since the last [`mark_rendered`](Self::mark_rendered).
    #[must_use]
    pub fn needs_redraw(&self) -> bool {
        self.rendered != Some((self.tasks.revision(), self.view_revision))
    }

    /// Record that the current state has been drawn.
    pub fn mark_rendered(&mut self) {
        self.rendered = Some((self.tasks.revision(), self.view_revision));
    }

    /// Force the next frame to be drawn (e.g. after a terminal resize).
    pub const fn request_redraw(&mut self) {
        self.rendered = None;
    }

    /// Handle a key event.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        self.view_revision += 1;

        // Global shortcuts
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Esc, _) => {
                self.should_quit = true;
                return;
            }
            (KeyCode::Tab | KeyCode::BackTab, _) => {
                self.toggle_focus();
                return;
            }
            _ => {}
        }

        match self.focus {
            PanelFocus::Input => self.handle_input_key(key),
            PanelFocus::Tasks => self.handle_tasks_key(key),
        }
    }

    /// Handle key event when input is focused.
    fn handle_input_key(&mut self, key: KeyEvent) {
        // The draft may have changed through `controller_mut`.
        self.clamp_cursor();

        match key.code {
            KeyCode::Enter => self.submit_task(),
            KeyCode::Char(c) if !is_control_chord(key.modifiers) => self.enter_char(c),
            KeyCode::Backspace => self.delete_char_before_cursor(),
            KeyCode::Delete => self.delete_char_at_cursor(),
            KeyCode::Left => self.move_cursor_left(),
            KeyCode::Right => self.move_cursor_right(),
            KeyCode::Home => self.cursor_position = 0,
            KeyCode::End => self.cursor_position = self.draft_len(),
            _ => {}
        }
    }

    /// Handle key event when the task list is focused.
    fn handle_tasks_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Char('d') | KeyCode::Delete | KeyCode::Backspace => self.delete_selected(),
            KeyCode::Char('C') => self.clear_all(),
            _ => {}
        }
    }

    const fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            PanelFocus::Input => PanelFocus::Tasks,
            PanelFocus::Tasks => PanelFocus::Input,
        };
    }

    /// Commit the draft as a new task.
    fn submit_task(&mut self) {
        match self.tasks.add_task() {
            Ok(()) => {
                self.cursor_position = 0;
                self.selected_task = self.tasks.len().saturating_sub(1);
            }
            Err(e) => tracing::debug!(error = %e, "task not added"),
        }
    }

    /// Delete the selected task.
    fn delete_selected(&mut self) {
        self.tasks.delete_task(self.selected_task);
        self.clamp_selection();
    }

    /// Clear the list. Only offered while there is something to clear.
    fn clear_all(&mut self) {
        if !self.state().can_clear() {
            return;
        }
        self.tasks.clear_all();
        self.selected_task = 0;
    }

    fn clamp_cursor(&mut self) {
        self.cursor_position = self.cursor_position.min(self.draft_len());
    }

    fn clamp_selection(&mut self) {
        self.selected_task = self
            .selected_task
            .min(self.tasks.len().saturating_sub(1));
    }

    const fn select_prev(&mut self) {
        if self.selected_task > 0 {
            self.selected_task -= 1;
        }
    }

    fn select_next(&mut self) {
        if self.selected_task < self.tasks.len().saturating_sub(1) {
            self.selected_task += 1;
        }
    }

    /// Insert a character at the cursor position.
    fn enter_char(&mut self, c: char) {
        let mut draft = self.tasks.draft().to_string();
        draft.insert(byte_index(&draft, self.cursor_position), c);
        self.tasks.set_draft(draft);
        self.cursor_position += 1;
    }

    /// Delete the character before the cursor.
    fn delete_char_before_cursor(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        let mut draft = self.tasks.draft().to_string();
        draft.remove(byte_index(&draft, self.cursor_position - 1));
        self.tasks.set_draft(draft);
        self.cursor_position -= 1;
    }

    /// Delete the character under the cursor.
    fn delete_char_at_cursor(&mut self) {
        if self.cursor_position >= self.draft_len() {
            return;
        }
        let mut draft = self.tasks.draft().to_string();
        draft.remove(byte_index(&draft, self.cursor_position));
        self.tasks.set_draft(draft);
    }

    const fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    fn move_cursor_right(&mut self) {
        if self.cursor_position < self.draft_len() {
            self.cursor_position += 1;
        }
    }

    fn draft_len(&self) -> usize {
        self.tasks.draft().chars().count()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Ctrl without Alt. AltGr arrives as Ctrl+Alt on Windows and still types.
fn is_control_chord(modifiers: KeyModifiers) -> bool {
    modifiers.contains(KeyModifiers::CONTROL) && !modifiers.contains(KeyModifiers::ALT)
}

/// Byte offset of the `char_idx`-th character, or the end of `s`.
#[must_use]
pub fn byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices().nth(char_idx).map_or(s.len(), |(i, _)| i)
}

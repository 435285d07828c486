//! Task list controller: owns the list, the input draft and the active error.
//!
//! Every operation is a synchronous state transition that either fully
//! applies or leaves the state untouched. Views pull the current state with
//! [`TaskListController::state`] and learn about changes either by comparing
//! [`TaskListController::revision`] between frames or by registering an
//! observer with [`TaskListController::subscribe`].

use std::fmt;

use crate::error::ValidationError;
use crate::task::Task;

/// Borrowed snapshot of the controller state, as read by a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskListState<'a> {
    /// Tasks in insertion order.
    pub tasks: &'a [Task],
    /// Text currently in the input field, untrimmed.
    pub draft: &'a str,
    /// Reason the last add attempt was rejected, if any.
    pub error: Option<ValidationError>,
}

impl TaskListState<'_> {
    /// The error message to show below the input, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        self.error.map(|e| e.to_string())
    }

    /// Whether a clear-all action should be offered.
    #[must_use]
    pub const fn can_clear(&self) -> bool {
        !self.tasks.is_empty()
    }
}

type Observer = Box<dyn FnMut(&TaskListState<'_>)>;

/// Owns the task list and enforces its single validation rule.
///
/// No two tasks are equal under case-insensitive, trimmed comparison, and
/// every task is non-empty after trimming.
#[derive(Default)]
pub struct TaskListController {
    tasks: Vec<Task>,
    draft: String,
    error: Option<ValidationError>,
    revision: u64,
    observers: Vec<Observer>,
}

impl TaskListController {
    /// Creates a controller with an empty list and an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the draft verbatim. No trimming, no validation.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text == self.draft {
            return;
        }
        self.draft = text;
        self.notify();
    }

    /// Commits the draft as a new task.
    ///
    /// On success the trimmed draft is appended with its original casing,
    /// the draft is reset and any previous error is cleared. On failure the
    /// list is untouched and the stored error is replaced with the returned
    /// one; the draft is kept so the user can fix it.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Empty`] if the draft trims to nothing, or
    /// [`ValidationError::Duplicate`] if an existing task matches it ignoring
    /// case.
    pub fn add_task(&mut self) -> Result<(), ValidationError> {
        let Some(candidate) = Task::parse(&self.draft) else {
            tracing::debug!("rejected empty task");
            return Err(self.reject(ValidationError::Empty));
        };

        if self.tasks.iter().any(|t| t.same_as(candidate.as_str())) {
            tracing::debug!(task = %candidate, "rejected duplicate task");
            return Err(self.reject(ValidationError::Duplicate));
        }

        tracing::debug!(task = %candidate, position = self.tasks.len(), "task added");
        self.tasks.push(candidate);
        self.draft.clear();
        self.error = None;
        self.notify();
        Ok(())
    }

    /// Removes the task at `index`, shifting later tasks left.
    ///
    /// Out-of-range indices are ignored. The draft and error are untouched.
    pub fn delete_task(&mut self, index: usize) {
        if index >= self.tasks.len() {
            tracing::debug!(index, len = self.tasks.len(), "delete index out of range, ignored");
            return;
        }
        let removed = self.tasks.remove(index);
        tracing::debug!(task = %removed, index, "task deleted");
        self.notify();
    }

    /// Empties the list. The draft and error are untouched.
    pub fn clear_all(&mut self) {
        if self.tasks.is_empty() {
            return;
        }
        tracing::debug!(count = self.tasks.len(), "all tasks cleared");
        self.tasks.clear();
        self.notify();
    }

    /// Current state, for rendering.
    #[must_use]
    pub fn state(&self) -> TaskListState<'_> {
        TaskListState {
            tasks: &self.tasks,
            draft: &self.draft,
            error: self.error,
        }
    }

    /// Tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The current draft.
    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// The active validation error.
    #[must_use]
    pub const fn error(&self) -> Option<ValidationError> {
        self.error
    }

    /// Number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Counter bumped on every state change. Views compare it between frames
    /// to decide whether to re-render.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Registers an observer called after every state change.
    ///
    /// Observers run synchronously, in registration order, with the new
    /// state. Calls that change nothing do not notify.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&TaskListState<'_>) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    fn reject(&mut self, error: ValidationError) -> ValidationError {
        if self.error != Some(error) {
            self.error = Some(error);
            self.notify();
        }
        error
    }

    fn notify(&mut self) {
        self.revision += 1;
        let state = TaskListState {
            tasks: &self.tasks,
            draft: &self.draft,
            error: self.error,
        };
        for observer in &mut self.observers {
            observer(&state);
        }
    }
}

impl fmt::Debug for TaskListController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskListController")
            .field("tasks", &self.tasks)
            .field("draft", &self.draft)
            .field("error", &self.error)
            .field("revision", &self.revision)
            .field("observers", &self.observers.len())
            .finish()
    }
}

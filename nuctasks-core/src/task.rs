//! The task entry type.

use std::fmt;

/// A single to-do entry.
///
/// Always trimmed and never empty. Original casing is kept; comparisons
/// against other entries ignore case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Task(String);

impl Task {
    /// Builds a task from raw input, trimming surrounding whitespace.
    ///
    /// Returns `None` if nothing remains after trimming.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// The task text as entered, minus surrounding whitespace.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `candidate` names this task, ignoring case and surrounding
    /// whitespace.
    #[must_use]
    pub fn same_as(&self, candidate: &str) -> bool {
        fold(&self.0) == fold(candidate)
    }
}

fn fold(text: &str) -> String {
    text.trim().to_lowercase()
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for Task {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

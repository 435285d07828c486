//! Validation failures surfaced to the user.

use thiserror::Error;

/// Why an add attempt was rejected.
///
/// The `Display` text is the exact message the view shows below the input.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The draft was empty or whitespace only.
    #[error("El campo de tarea está vacío.")]
    Empty,
    /// A task with the same text (ignoring case) already exists.
    #[error("¡La tarea ya existe!")]
    Duplicate,
}

//! Fixed user-facing strings (Spanish UI copy).

/// Application title.
pub const TITLE: &str = "Nuctasks";

/// Placeholder shown in the empty input field.
pub const INPUT_PLACEHOLDER: &str = "¿Qué tarea desea agregar?";

/// Label of the add action.
pub const ADD_LABEL: &str = "Agregar";

/// Label of the per-row delete action.
pub const DELETE_LABEL: &str = "Borrar";

/// Label of the clear-all action.
pub const CLEAR_ALL_LABEL: &str = "Borrar todas";

/// Shown when the draft trims to nothing.
pub const EMPTY_TASK_MESSAGE: &str = "El campo de tarea está vacío.";

/// Shown when the draft matches an existing task.
pub const DUPLICATE_TASK_MESSAGE: &str = "¡La tarea ya existe!";

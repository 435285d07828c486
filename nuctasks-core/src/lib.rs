//! Core state for `Nuctasks`, a single-page task list.
//!
//! Holds the task list, the input draft and the active validation error.
//! Knows nothing about terminals; any view can drive a
//! [`TaskListController`](controller::TaskListController).

pub mod controller;
pub mod copy;
pub mod error;
pub mod task;

pub use controller::{TaskListController, TaskListState};
pub use error::ValidationError;
pub use task::Task;

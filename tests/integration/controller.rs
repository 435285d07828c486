//! Integration tests for the task list controller.
//!
//! # Verification Focus
//!
//! - Empty and whitespace-only drafts are rejected
//! - Duplicates are rejected ignoring case
//! - Successful adds trim, keep casing, reset the draft and clear the error
//! - Delete by index and out-of-range no-op
//! - Clear all is idempotent
//! - Insertion order is preserved

use nuctasks_core::{TaskListController, ValidationError};

fn titles(ctl: &TaskListController) -> Vec<&str> {
    ctl.tasks().iter().map(nuctasks_core::Task::as_str).collect()
}

fn add(ctl: &mut TaskListController, text: &str) -> Result<(), ValidationError> {
    ctl.set_draft(text);
    ctl.add_task()
}

// =============================================================================
// Empty rejection
// =============================================================================

#[test]
fn test_empty_draft_is_rejected() {
    let mut ctl = TaskListController::new();
    for blank in ["", " ", "   ", "\t", "\n  \t"] {
        let result = add(&mut ctl, blank);
        assert_eq!(result, Err(ValidationError::Empty), "input {blank:?}");
        assert!(ctl.is_empty(), "list must stay empty for {blank:?}");
        assert_eq!(
            ctl.state().error_message().as_deref(),
            Some("El campo de tarea está vacío.")
        );
    }
}

#[test]
fn test_empty_draft_does_not_touch_existing_tasks() {
    let mut ctl = TaskListController::new();
    add(&mut ctl, "A").unwrap();
    add(&mut ctl, "    ").unwrap_err();
    assert_eq!(titles(&ctl), vec!["A"]);
}

// =============================================================================
// Duplicate rejection (case-insensitive)
// =============================================================================

#[test]
fn test_duplicate_is_rejected_ignoring_case() {
    let mut ctl = TaskListController::new();
    add(&mut ctl, "Buy milk").unwrap();

    let result = add(&mut ctl, "buy milk");

    assert_eq!(result, Err(ValidationError::Duplicate));
    assert_eq!(ctl.len(), 1);
    assert_eq!(titles(&ctl), vec!["Buy milk"]);
    assert_eq!(ctl.error(), Some(ValidationError::Duplicate));
    assert_eq!(
        ctl.state().error_message().as_deref(),
        Some("¡La tarea ya existe!")
    );
}

#[test]
fn test_duplicate_with_surrounding_whitespace_is_rejected() {
    let mut ctl = TaskListController::new();
    add(&mut ctl, "Buy milk").unwrap();
    assert_eq!(
        add(&mut ctl, "   BUY MILK  "),
        Err(ValidationError::Duplicate)
    );
    assert_eq!(ctl.len(), 1);
}

// =============================================================================
// Successful add
// =============================================================================

#[test]
fn test_add_trims_and_preserves_case() {
    let mut ctl = TaskListController::new();
    ctl.set_draft("  Walk dog  ");
    assert!(ctl.add_task().is_ok());

    let state = ctl.state();
    assert_eq!(state.tasks.len(), 1);
    assert_eq!(state.tasks[0].as_str(), "Walk dog");
    assert_eq!(state.draft, "");
    assert!(state.error.is_none());
    assert!(state.error_message().is_none());
}

#[test]
fn test_error_clears_on_next_successful_add() {
    let mut ctl = TaskListController::new();
    add(&mut ctl, "Buy milk").unwrap();
    add(&mut ctl, "BUY milk").unwrap_err();
    assert!(ctl.error().is_some());

    add(&mut ctl, "Walk dog").unwrap();
    assert!(ctl.error().is_none());
    assert_eq!(titles(&ctl), vec!["Buy milk", "Walk dog"]);
}

// =============================================================================
// Delete by index
// =============================================================================

#[test]
fn test_delete_by_index_shifts_rest() {
    let mut ctl = TaskListController::new();
    for t in ["A", "B", "C"] {
        add(&mut ctl, t).unwrap();
    }

    ctl.delete_task(1);
    assert_eq!(titles(&ctl), vec!["A", "C"]);

    ctl.delete_task(5);
    assert_eq!(titles(&ctl), vec!["A", "C"]);
}

#[test]
fn test_delete_on_empty_list_is_noop() {
    let mut ctl = TaskListController::new();
    ctl.delete_task(0);
    assert!(ctl.is_empty());
    assert!(ctl.error().is_none());
}

#[test]
fn test_delete_last_and_first() {
    let mut ctl = TaskListController::new();
    for t in ["A", "B", "C"] {
        add(&mut ctl, t).unwrap();
    }
    ctl.delete_task(2);
    ctl.delete_task(0);
    assert_eq!(titles(&ctl), vec!["B"]);
}

// =============================================================================
// Clear all
// =============================================================================

#[test]
fn test_clear_all_is_idempotent() {
    let mut ctl = TaskListController::new();
    for t in ["A", "B"] {
        add(&mut ctl, t).unwrap();
    }
    assert!(ctl.state().can_clear());

    ctl.clear_all();
    assert!(ctl.is_empty());
    assert!(!ctl.state().can_clear());

    ctl.clear_all();
    assert!(ctl.is_empty());
}

#[test]
fn test_clear_all_does_not_touch_draft() {
    let mut ctl = TaskListController::new();
    add(&mut ctl, "A").unwrap();
    ctl.set_draft("in progress");
    ctl.clear_all();
    assert_eq!(ctl.draft(), "in progress");
}

// =============================================================================
// Order preservation
// =============================================================================

#[test]
fn test_insertion_order_is_preserved() {
    let mut ctl = TaskListController::new();
    for t in ["X", "Y", "Z"] {
        add(&mut ctl, t).unwrap();
    }
    assert_eq!(titles(&ctl), vec!["X", "Y", "Z"]);

    add(&mut ctl, "A").unwrap();
    assert_eq!(titles(&ctl), vec!["X", "Y", "Z", "A"]);
}

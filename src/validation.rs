//! Input validation for dispatch runs.
//!
//! Checks structural integrity of a task list before simulation. The one
//! way an input can break the admission contract is a repeated task id, so
//! that is what gets detected — every occurrence, not just the first.
//!
//! The scheduler does not call this implicitly; it surfaces the same
//! condition as a run error. Callers that prefer rejecting bad input
//! upfront run this check first.

use std::collections::HashSet;

use crate::models::Task;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The task id the error refers to.
    pub task_id: String,
    /// Human-readable description.
    pub message: String,
}

impl ValidationError {
    fn duplicate_id(id: &str) -> Self {
        Self {
            task_id: id.to_string(),
            message: format!("Duplicate task ID: {id}"),
        }
    }
}

/// Validates the input for a dispatch run.
///
/// Checks that every task id is unique across the run.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(tasks: &[Task]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for task in tasks {
        if !seen.insert(task.id.as_str()) {
            errors.push(ValidationError::duplicate_id(&task.id));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input() {
        let tasks = vec![
            Task::new("T1").with_priority(3),
            Task::new("T2").with_priority(5).with_arrival(1),
        ];
        assert!(validate_input(&tasks).is_ok());
    }

    #[test]
    fn test_empty_input_is_valid() {
        assert!(validate_input(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_task_id() {
        let tasks = vec![Task::new("T1"), Task::new("T2"), Task::new("T1")];

        let errors = validate_input(&tasks).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].task_id, "T1");
        assert!(errors[0].message.contains("T1"));
    }

    #[test]
    fn test_all_duplicates_reported() {
        let tasks = vec![
            Task::new("a"),
            Task::new("a"),
            Task::new("b"),
            Task::new("b"),
            Task::new("b"),
        ];

        let errors = validate_input(&tasks).unwrap_err();
        // One error per repeated occurrence.
        assert_eq!(errors.len(), 3);
    }
}

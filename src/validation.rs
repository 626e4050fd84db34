//! Input validation for planning runs.
//!
//! The planner assumes well-formed input; these checks belong to the
//! boundary layer that feeds it. Detects:
//! - Duplicate assignment or task IDs
//! - Duplicate order indices within one assignment
//! - Effort or availability hours outside `[0, 24]`
//! - Tasks filed under the wrong assignment
//! - Task lists with no matching assignment

use std::collections::{HashMap, HashSet};
use uuid::Uuid;

use crate::models::{Assignment, Availability, Task, MAX_DAILY_HOURS, MAX_EFFORT_HOURS};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// Two tasks of one assignment share an order index.
    DuplicateOrderIndex,
    /// Effort hours above the cap.
    EffortOutOfRange,
    /// A weekday declares more hours than a day has.
    AvailabilityOutOfRange,
    /// A task's `assignment_id` differs from the list it is filed under.
    AssignmentMismatch,
    /// A task list is keyed by an assignment that is not being planned.
    UnknownAssignment,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

/// Clamps a raw hour value into `[0, 24]`.
pub fn clamp_hours(hours: i64) -> u32 {
    hours.clamp(0, i64::from(MAX_EFFORT_HOURS)) as u32
}

/// Checks that every weekday declares at most 24 hours.
pub fn validate_availability(availability: &Availability) -> ValidationResult {
    let errors: Vec<ValidationError> = availability
        .week()
        .iter()
        .zip(["mon", "tue", "wed", "thu", "fri", "sat", "sun"])
        .filter(|(hours, _)| **hours > MAX_DAILY_HOURS)
        .map(|(hours, day)| {
            ValidationError::new(
                ValidationErrorKind::AvailabilityOutOfRange,
                format!("{day}_hours = {hours} exceeds {MAX_DAILY_HOURS}"),
            )
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates the input of a global planning run.
///
/// Checks:
/// 1. No duplicate assignment IDs
/// 2. No duplicate task IDs (across all lists)
/// 3. No duplicate order indices within one list
/// 4. Effort hours within the cap
/// 5. Every task's `assignment_id` matches its list key
/// 6. Every list key names a planned assignment
/// 7. Availability hours within range
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_plan_input(
    assignments: &[Assignment],
    tasks_by_assignment: &HashMap<Uuid, Vec<Task>>,
    availability: &Availability,
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut assignment_ids = HashSet::new();
    for a in assignments {
        if !assignment_ids.insert(a.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate assignment ID: {}", a.id),
            ));
        }
    }

    let mut task_ids = HashSet::new();
    for (key, tasks) in tasks_by_assignment {
        if !assignment_ids.contains(key) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownAssignment,
                format!("Task list keyed by unknown assignment '{key}'"),
            ));
        }

        let mut order_indices = HashSet::new();
        for t in tasks {
            if !task_ids.insert(t.id) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateId,
                    format!("Duplicate task ID: {}", t.id),
                ));
            }
            if !order_indices.insert(t.order_index) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateOrderIndex,
                    format!("Assignment '{key}' has two tasks at order index {}", t.order_index),
                ));
            }
            if t.effort_hours > MAX_EFFORT_HOURS {
                errors.push(ValidationError::new(
                    ValidationErrorKind::EffortOutOfRange,
                    format!("Task '{}' needs {}h, cap is {MAX_EFFORT_HOURS}", t.id, t.effort_hours),
                ));
            }
            if t.assignment_id != *key {
                errors.push(ValidationError::new(
                    ValidationErrorKind::AssignmentMismatch,
                    format!(
                        "Task '{}' belongs to '{}' but is filed under '{key}'",
                        t.id, t.assignment_id
                    ),
                ));
            }
        }
    }

    if let Err(mut availability_errors) = validate_availability(availability) {
        errors.append(&mut availability_errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

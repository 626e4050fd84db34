//! Error types for the planning orchestrator.
//!
//! The scheduling engine itself never fails: a task that does not fit is
//! reported as unscheduled data. These errors cover lookups and input
//! checks at the orchestration boundary.

use thiserror::Error;
use uuid::Uuid;

use crate::validation::ValidationError;

/// Errors produced by orchestrator operations.
#[derive(Debug, Error)]
pub enum PlannerError {
    /// No assignment with this id.
    #[error("assignment not found: {0}")]
    AssignmentNotFound(Uuid),
    /// No task with this id.
    #[error("task not found: {0}")]
    TaskNotFound(Uuid),
    /// The task exists but belongs to a different assignment.
    #[error("task {task_id} does not belong to assignment {assignment_id}")]
    TaskNotInAssignment {
        /// Requested task.
        task_id: Uuid,
        /// Assignment named in the request.
        assignment_id: Uuid,
    },
    /// Input rejected by boundary validation.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Configuration could not be loaded.
    #[error("config error: {0}")]
    Config(String),
}

impl From<Vec<ValidationError>> for PlannerError {
    fn from(errors: Vec<ValidationError>) -> Self {
        let joined = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        PlannerError::InvalidInput(joined)
    }
}

/// Result alias for orchestrator operations.
pub type PlannerResult<T> = Result<T, PlannerError>;

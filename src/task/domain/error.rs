//! Error types for task domain validation and parsing.

use super::TaskId;
use thiserror::Error;

/// Errors returned while constructing or changing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task identifier is empty after trimming.
    #[error("task id must not be empty")]
    EmptyTaskId,

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task description is empty after trimming.
    #[error("task description must not be empty")]
    EmptyDescription,

    /// The due date is empty after trimming.
    #[error("due date must not be empty")]
    EmptyDueDate,

    /// The due date is neither an RFC 3339 date-time nor a calendar date.
    #[error("invalid due date '{value}', expected RFC 3339 (e.g. 2030-01-01T09:00:00Z) or YYYY-MM-DD")]
    InvalidDueDate {
        /// Raw value supplied by the caller.
        value: String,
    },

    /// The due date lies before the moment it was submitted.
    #[error("due date {0} cannot be in the past")]
    DueDateInPast(String),

    /// Two tasks share one identifier.
    #[error("duplicate task id {0}")]
    DuplicateTaskId(TaskId),

    /// The status value is not one of the recognised task statuses.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),
}

/// Error returned while parsing task statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status '{0}', expected open, in_progress, or completed")]
pub struct ParseTaskStatusError(pub String);

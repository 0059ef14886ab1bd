//! Identifier type for the task domain.

use super::TaskDomainError;
use chrono::{DateTime, Utc};
use std::fmt;

const NANOS_PER_SECOND: i128 = 1_000_000_000;

/// Opaque identifier for a stored task.
///
/// Generated identifiers are the decimal nanosecond timestamp of the moment
/// the task was created. Identifiers read back from storage go through
/// [`TaskId::new`] like any other input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskId(String);

impl TaskId {
    /// Creates a task identifier from caller-supplied text.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTaskId`] when the value is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(TaskDomainError::EmptyTaskId);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Generates an identifier from `at`, skipping forward one nanosecond at
    /// a time while `is_taken` reports a collision.
    #[must_use]
    pub fn generate(at: DateTime<Utc>, is_taken: impl Fn(&Self) -> bool) -> Self {
        let mut nanos =
            i128::from(at.timestamp()) * NANOS_PER_SECOND + i128::from(at.timestamp_subsec_nanos());
        loop {
            let candidate = Self(nanos.to_string());
            if !is_taken(&candidate) {
                return candidate;
            }
            nanos += 1;
        }
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

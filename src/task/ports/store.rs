//! Store port for whole-list task persistence.

use crate::task::domain::Task;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Whole-list task persistence contract.
///
/// Stores have no incremental or transactional semantics: callers load the
/// complete list, change it in memory, and save the complete list back.
pub trait TaskStore {
    /// Loads every stored task in insertion order.
    ///
    /// A store that has never been written yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Parse`] when persisted data is malformed,
    /// holds an invalid field, or repeats an identifier. Returns
    /// [`TaskStoreError::Io`] when it cannot be read.
    fn load(&self) -> TaskStoreResult<Vec<Task>>;

    /// Replaces the stored list with `tasks`, creating the store if absent.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Io`] when the list cannot be written.
    fn save(&self, tasks: &[Task]) -> TaskStoreResult<()>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// Persisted data exists but is not well-formed.
    #[error("failed to parse task store {location}: {source}")]
    Parse {
        /// Human-readable store location.
        location: String,
        /// Underlying decoder error.
        source: Arc<dyn std::error::Error + Send + Sync>,
    },

    /// Reading or writing the store failed.
    #[error("task store I/O failure at {location}: {source}")]
    Io {
        /// Human-readable store location.
        location: String,
        /// Underlying I/O error.
        source: Arc<std::io::Error>,
    },
}

impl TaskStoreError {
    /// Wraps a decoding error for the store at `location`.
    pub fn parse(
        location: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Parse {
            location: location.into(),
            source: Arc::new(err),
        }
    }

    /// Wraps an I/O error for the store at `location`.
    pub fn io(location: impl Into<String>, err: std::io::Error) -> Self {
        Self::Io {
            location: location.into(),
            source: Arc::new(err),
        }
    }
}

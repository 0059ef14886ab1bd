//! In-memory store for task service tests.

use std::sync::{Arc, RwLock};

use crate::task::{
    domain::Task,
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

const LOCATION: &str = "memory";

/// Thread-safe in-memory task store.
///
/// Clones share the same underlying list, so a test can keep a handle and
/// inspect what a service saved.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    tasks: Arc<RwLock<Vec<Task>>>,
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: &impl std::fmt::Display) -> TaskStoreError {
    TaskStoreError::io(LOCATION, std::io::Error::other(err.to_string()))
}

impl TaskStore for InMemoryTaskStore {
    fn load(&self) -> TaskStoreResult<Vec<Task>> {
        let tasks = self.tasks.read().map_err(|err| poisoned(&err))?;
        Ok(tasks.clone())
    }

    fn save(&self, tasks: &[Task]) -> TaskStoreResult<()> {
        let mut stored = self.tasks.write().map_err(|err| poisoned(&err))?;
        tasks.clone_into(&mut *stored);
        Ok(())
    }
}

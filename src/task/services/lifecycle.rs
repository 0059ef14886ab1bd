//! Service layer for adding, listing, updating, and deleting tasks.

use crate::task::{
    domain::{
        DueDate, Task, TaskChanges, TaskDescription, TaskDomainError, TaskId, TaskStatus,
        TaskTitle,
    },
    ports::{TaskStore, TaskStoreError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Request payload for adding a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTaskRequest {
    title: String,
    description: String,
    due: String,
}

impl AddTaskRequest {
    /// Creates a request with the required task fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        due: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            due: due.into(),
        }
    }
}

/// Request payload for updating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    id: String,
    title: Option<String>,
    description: Option<String>,
    status: Option<String>,
    due: Option<String>,
}

impl UpdateTaskRequest {
    /// Creates a request that only refreshes the task's modification time.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            description: None,
            status: None,
            due: None,
        }
    }

    /// Sets a replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets a replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets a replacement status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets a replacement due date.
    #[must_use]
    pub fn with_due(mut self, due: impl Into<String>) -> Self {
        self.due = Some(due.into());
        self
    }
}

/// Coarse classification of service failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Caller input was missing or invalid.
    Validation,
    /// No task matches the requested identifier.
    NotFound,
    /// The store exists but is not well-formed.
    Parse,
    /// The store could not be read or written.
    Io,
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),
    /// No task has the requested identifier.
    #[error("task with id {0} not found")]
    NotFound(TaskId),
    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
}

impl TaskLifecycleError {
    /// Returns the failure classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Store(TaskStoreError::Parse { .. }) => ErrorKind::Parse,
            Self::Store(TaskStoreError::Io { .. }) => ErrorKind::Io,
        }
    }
}

/// Result type for task service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task orchestration service.
///
/// Every operation is a full load, an in-memory change, and (for mutations)
/// a full save. Input is validated before the store is touched.
#[derive(Clone)]
pub struct TaskLifecycleService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
}

impl<S, C> TaskLifecycleService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self { store, clock }
    }

    /// Adds a new open task and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Validation`] when a field is blank or the
    /// due date is malformed or past, and [`TaskLifecycleError::Store`] when
    /// the store cannot be loaded or saved.
    pub fn add(&self, request: AddTaskRequest) -> TaskLifecycleResult<Task> {
        let now = self.clock.utc();
        let title = TaskTitle::new(request.title)?;
        let description = TaskDescription::new(request.description)?;
        let due_at = DueDate::parse(&request.due, now)?;

        let mut tasks = self.store.load()?;
        let id = TaskId::generate(now, |candidate| {
            tasks.iter().any(|task| task.id() == candidate)
        });
        let task = Task::new(id, title, description, due_at, now);
        tasks.push(task.clone());
        self.store.save(&tasks)?;

        info!(task_id = %task.id(), "added task");
        Ok(task)
    }

    /// Returns every task in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Store`] when the store cannot be loaded.
    pub fn list(&self) -> TaskLifecycleResult<Vec<Task>> {
        let tasks = self.store.load()?;
        debug!(count = tasks.len(), "listed tasks");
        Ok(tasks)
    }

    /// Returns the task with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no task matches and
    /// [`TaskLifecycleError::Store`] when the store cannot be loaded.
    pub fn find(&self, id: &str) -> TaskLifecycleResult<Task> {
        let task_id = TaskId::new(id)?;
        self.store
            .load()?
            .into_iter()
            .find(|task| task.id() == &task_id)
            .ok_or(TaskLifecycleError::NotFound(task_id))
    }

    /// Applies the supplied field replacements to a task and returns it.
    ///
    /// The modification timestamp is refreshed even when no field is
    /// supplied.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Validation`] when a supplied field is
    /// invalid, [`TaskLifecycleError::NotFound`] when no task matches, and
    /// [`TaskLifecycleError::Store`] when the store cannot be loaded or
    /// saved.
    pub fn update(&self, request: UpdateTaskRequest) -> TaskLifecycleResult<Task> {
        let task_id = TaskId::new(request.id)?;
        let changes = self.validate_changes(
            request.title,
            request.description,
            request.status,
            request.due,
        )?;

        let mut tasks = self.store.load()?;
        let task = tasks
            .iter_mut()
            .find(|task| task.id() == &task_id)
            .ok_or_else(|| TaskLifecycleError::NotFound(task_id.clone()))?;
        task.apply(changes, &*self.clock);
        let updated = task.clone();
        self.store.save(&tasks)?;

        info!(task_id = %updated.id(), "updated task");
        Ok(updated)
    }

    /// Removes a task and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no task matches, leaving
    /// the store untouched, and [`TaskLifecycleError::Store`] when the store
    /// cannot be loaded or saved.
    pub fn delete(&self, id: &str) -> TaskLifecycleResult<Task> {
        let task_id = TaskId::new(id)?;
        let mut tasks = self.store.load()?;
        let position = tasks
            .iter()
            .position(|task| task.id() == &task_id)
            .ok_or(TaskLifecycleError::NotFound(task_id))?;
        let removed = tasks.remove(position);
        self.store.save(&tasks)?;

        info!(task_id = %removed.id(), "deleted task");
        Ok(removed)
    }

    fn validate_changes(
        &self,
        title: Option<String>,
        description: Option<String>,
        status: Option<String>,
        due: Option<String>,
    ) -> Result<TaskChanges, TaskDomainError> {
        let now = self.clock.utc();
        Ok(TaskChanges {
            title: title.map(TaskTitle::new).transpose()?,
            description: description.map(TaskDescription::new).transpose()?,
            status: status
                .as_deref()
                .map(TaskStatus::try_from)
                .transpose()?,
            due_at: due.map(|raw| DueDate::parse(&raw, now)).transpose()?,
        })
    }
}

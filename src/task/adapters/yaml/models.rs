//! On-disk record layout for the YAML task store.

use std::collections::HashSet;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::task::domain::{
    DueDate, PersistedTaskData, Task, TaskDescription, TaskDomainError, TaskId, TaskStatus,
    TaskTitle,
};

/// One task as written to the store file.
///
/// Field order is the record layout on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Task identifier.
    pub id: String,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Status in snake case.
    pub status: String,
    /// Creation timestamp.
    pub created_at: DateTime<FixedOffset>,
    /// Last update timestamp.
    pub updated_at: DateTime<FixedOffset>,
    /// Due moment.
    pub due_at: DateTime<FixedOffset>,
}

impl From<&Task> for TaskRecord {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().to_string(),
            title: task.title().to_string(),
            description: task.description().to_string(),
            status: task.status().as_str().to_owned(),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
            due_at: task.due_at().as_date_time(),
        }
    }
}

/// Rebuilds tasks from stored records, rejecting blank fields, unknown
/// statuses, and repeated identifiers.
pub fn records_to_tasks(records: Vec<TaskRecord>) -> Result<Vec<Task>, TaskDomainError> {
    let mut seen = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .map(|record| {
            let task = record_to_task(record)?;
            if !seen.insert(task.id().clone()) {
                return Err(TaskDomainError::DuplicateTaskId(task.id().clone()));
            }
            Ok(task)
        })
        .collect()
}

fn record_to_task(record: TaskRecord) -> Result<Task, TaskDomainError> {
    let TaskRecord {
        id,
        title,
        description,
        status,
        created_at,
        updated_at,
        due_at,
    } = record;

    let data = PersistedTaskData {
        id: TaskId::new(id)?,
        title: TaskTitle::new(title)?,
        description: TaskDescription::new(description)?,
        status: TaskStatus::try_from(status.as_str())?,
        created_at,
        updated_at,
        due_at: DueDate::from_date_time(due_at),
    };
    Ok(Task::from_persisted(data))
}

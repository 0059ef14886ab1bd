//! Domain model for personal task tracking.
//!
//! The task domain validates user input and owns the task aggregate while
//! keeping file formats and storage concerns outside of the domain boundary.

mod due;
mod error;
mod ids;
mod task;
mod text;

pub use due::DueDate;
pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use task::{PersistedTaskData, Task, TaskChanges, TaskStatus};
pub use text::{TaskDescription, TaskTitle};

//! Application services for task orchestration.

mod lifecycle;

pub use lifecycle::{
    AddTaskRequest, ErrorKind, TaskLifecycleError, TaskLifecycleResult, TaskLifecycleService,
    UpdateTaskRequest,
};

//! Command-line surface for Citrine.
//!
//! Commands are parsed with `clap`, dispatched to
//! [`TaskLifecycleService`], and report their results on the supplied
//! writer.

mod table;

use std::io::{self, Write};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use mockable::{Clock, DefaultClock};
use thiserror::Error;

use crate::config::{Config, STORE_ENV_VAR};
use crate::task::{
    adapters::yaml::{DEFAULT_STORE_FILE, YamlFileTaskStore},
    ports::TaskStore,
    services::{AddTaskRequest, TaskLifecycleError, TaskLifecycleService, UpdateTaskRequest},
};

pub use table::render as render_table;

/// Top-level command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "citrine")]
#[command(version)]
#[command(about = "A simple task manager that keeps your tasks in a YAML file")]
pub struct Cli {
    /// Path of the task store file
    #[arg(long, global = true, env = STORE_ENV_VAR, default_value = DEFAULT_STORE_FILE)]
    pub store: String,

    /// Operation to perform
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Resolves runtime configuration from the parsed arguments.
    #[must_use]
    pub fn config(&self) -> Config {
        Config::new(self.store.as_str())
    }
}

/// Task operations exposed on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Add a new task
    Add {
        /// Title of the task
        #[arg(long)]
        title: String,
        /// Description of the task
        #[arg(long)]
        description: String,
        /// Due date in RFC 3339 format (e.g. 2030-01-01T09:00:00Z) or YYYY-MM-DD
        #[arg(long)]
        due: String,
    },
    /// List all tasks
    List,
    /// Show a single task
    Show {
        /// ID of the task
        #[arg(long)]
        id: String,
    },
    /// Update fields of an existing task
    Update {
        /// ID of the task
        #[arg(long)]
        id: String,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New status: open, in_progress, or completed
        #[arg(long)]
        status: Option<String>,
        /// New due date in RFC 3339 format or YYYY-MM-DD
        #[arg(long)]
        due: Option<String>,
    },
    /// Delete a task
    Delete {
        /// ID of the task
        #[arg(long)]
        id: String,
    },
}

/// Errors surfaced by command execution.
#[derive(Debug, Error)]
pub enum CliError {
    /// The task operation failed.
    #[error(transparent)]
    Task(#[from] TaskLifecycleError),
    /// Writing the command result failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Opens the configured store and executes the parsed command.
///
/// # Errors
///
/// Returns [`CliError`] when the store cannot be opened, the operation
/// fails, or output cannot be written.
pub fn run(cli: Cli, out: &mut impl Write) -> Result<(), CliError> {
    let config = cli.config();
    let store = YamlFileTaskStore::open(config.store_path()).map_err(TaskLifecycleError::from)?;
    let service = TaskLifecycleService::new(Arc::new(store), Arc::new(DefaultClock));
    execute(cli.command, &service, out)
}

/// Executes `command` against `service`, writing results to `out`.
///
/// # Errors
///
/// Returns [`CliError`] when the operation fails or output cannot be
/// written.
pub fn execute<S, C>(
    command: Command,
    service: &TaskLifecycleService<S, C>,
    out: &mut impl Write,
) -> Result<(), CliError>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    match command {
        Command::Add {
            title,
            description,
            due,
        } => {
            let task = service.add(AddTaskRequest::new(title, description, due))?;
            writeln!(out, "Task added successfully: {}", task.id())?;
        }
        Command::List => {
            let tasks = service.list()?;
            out.write_all(render_table(&tasks).as_bytes())?;
        }
        Command::Show { id } => {
            let task = service.find(&id)?;
            out.write_all(render_table(std::slice::from_ref(&task)).as_bytes())?;
        }
        Command::Update {
            id,
            title,
            description,
            status,
            due,
        } => {
            let request = update_request(id, title, description, status, due);
            let task = service.update(request)?;
            writeln!(out, "Task updated successfully: {}", task.id())?;
        }
        Command::Delete { id } => {
            let task = service.delete(&id)?;
            writeln!(out, "Task deleted successfully: {}", task.id())?;
        }
    }
    Ok(())
}

fn update_request(
    id: String,
    title: Option<String>,
    description: Option<String>,
    status: Option<String>,
    due: Option<String>,
) -> UpdateTaskRequest {
    let mut request = UpdateTaskRequest::new(id);
    if let Some(value) = title {
        request = request.with_title(value);
    }
    if let Some(value) = description {
        request = request.with_description(value);
    }
    if let Some(value) = status {
        request = request.with_status(value);
    }
    if let Some(value) = due {
        request = request.with_due(value);
    }
    request
}

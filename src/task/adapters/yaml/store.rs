//! Task store backed by a single YAML file.

use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use tracing::debug;

use super::models::{TaskRecord, records_to_tasks};
use crate::task::{
    domain::Task,
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// File name used when no store path is configured.
pub const DEFAULT_STORE_FILE: &str = ".citrine.yml";

/// Task store persisting the whole task list as a YAML sequence.
///
/// The parent directory is opened once as a capability handle; every load
/// reads the whole file and every save truncates and rewrites it.
#[derive(Debug)]
pub struct YamlFileTaskStore {
    dir: Dir,
    file_name: String,
    path: Utf8PathBuf,
}

impl YamlFileTaskStore {
    /// Opens a store at `path`. The file itself need not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Io`] when `path` has no file name or its
    /// parent directory cannot be opened.
    pub fn open(path: impl AsRef<Utf8Path>) -> TaskStoreResult<Self> {
        let store_path = path.as_ref();
        let file_name = store_path.file_name().ok_or_else(|| {
            TaskStoreError::io(
                store_path.as_str(),
                io::Error::other("store path must include a file name"),
            )
        })?;
        let parent = store_path
            .parent()
            .filter(|dir| !dir.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));
        let dir = Dir::open_ambient_dir(parent, ambient_authority())
            .map_err(|err| TaskStoreError::io(store_path.as_str(), err))?;

        Ok(Self {
            dir,
            file_name: file_name.to_owned(),
            path: store_path.to_owned(),
        })
    }

    /// Returns the configured store path.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    fn location(&self) -> &str {
        self.path.as_str()
    }
}

impl TaskStore for YamlFileTaskStore {
    fn load(&self) -> TaskStoreResult<Vec<Task>> {
        let contents = match self.dir.read_to_string(self.file_name.as_str()) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path, "task store file absent, starting empty");
                return Ok(Vec::new());
            }
            Err(err) => return Err(TaskStoreError::io(self.location(), err)),
        };

        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        let records: Vec<TaskRecord> = serde_yaml::from_str(&contents)
            .map_err(|err| TaskStoreError::parse(self.location(), err))?;
        let tasks = records_to_tasks(records)
            .map_err(|err| TaskStoreError::parse(self.location(), err))?;
        debug!(path = %self.path, count = tasks.len(), "loaded tasks");
        Ok(tasks)
    }

    fn save(&self, tasks: &[Task]) -> TaskStoreResult<()> {
        let records: Vec<TaskRecord> = tasks.iter().map(TaskRecord::from).collect();
        let contents = serde_yaml::to_string(&records)
            .map_err(|err| TaskStoreError::io(self.location(), io::Error::other(err)))?;
        self.dir
            .write(self.file_name.as_str(), contents)
            .map_err(|err| TaskStoreError::io(self.location(), err))?;
        debug!(path = %self.path, count = tasks.len(), "saved tasks");
        Ok(())
    }
}

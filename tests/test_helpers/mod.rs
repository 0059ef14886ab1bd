//! Shared fixtures for integration tests: temporary store files and scoped
//! environment variables.

#![allow(dead_code, reason = "each test crate uses a different subset of helpers")]

use std::env;
use std::ffi::OsString;
use std::sync::{Mutex, MutexGuard, OnceLock};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use citrine::task::{
    adapters::yaml::{DEFAULT_STORE_FILE, YamlFileTaskStore},
    services::TaskLifecycleService,
};
use eyre::{WrapErr, eyre};
use mockable::DefaultClock;
use tempfile::TempDir;

/// Due date far enough ahead that it never becomes past during a test run.
pub const FAR_FUTURE: &str = "2999-12-31T23:59:59Z";

/// Service type wired to a real YAML store and the system clock.
pub type FileService = TaskLifecycleService<YamlFileTaskStore, DefaultClock>;

static ENV_MUTEX: OnceLock<Mutex<()>> = OnceLock::new();

/// Temporary directory holding a single task store file.
pub struct StoreDir {
    _temp: TempDir,
    dir: Dir,
    root: Utf8PathBuf,
}

impl StoreDir {
    /// Creates an empty temporary directory; the store file does not exist
    /// yet.
    pub fn new() -> Result<Self, eyre::Report> {
        let temp = tempfile::tempdir().wrap_err("create temporary store directory")?;
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf())
            .map_err(|path| eyre!("temporary directory is not UTF-8: {}", path.display()))?;
        let dir = Dir::open_ambient_dir(&root, ambient_authority())
            .wrap_err("open temporary store directory")?;
        Ok(Self {
            _temp: temp,
            dir,
            root,
        })
    }

    /// Returns the directory containing the store.
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Returns the full path of the store file.
    pub fn store_path(&self) -> Utf8PathBuf {
        self.root.join(DEFAULT_STORE_FILE)
    }

    /// Opens a YAML store on the store file.
    pub fn open(&self) -> Result<YamlFileTaskStore, eyre::Report> {
        YamlFileTaskStore::open(self.store_path()).wrap_err("open YAML task store")
    }

    /// Builds a task service backed by the store file.
    pub fn service(&self) -> Result<FileService, eyre::Report> {
        Ok(TaskLifecycleService::new(
            self.open()?.into(),
            DefaultClock.into(),
        ))
    }

    /// Overwrites the store file with raw text.
    pub fn write_raw(&self, contents: &str) -> Result<(), eyre::Report> {
        self.dir
            .write(DEFAULT_STORE_FILE, contents)
            .wrap_err("write raw store contents")
    }

    /// Reads the raw store file, or `None` when it does not exist.
    pub fn read_raw(&self) -> Result<Option<String>, eyre::Report> {
        match self.dir.read_to_string(DEFAULT_STORE_FILE) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).wrap_err("read raw store contents"),
        }
    }
}

/// Guard that applies a scoped environment variable update.
pub struct EnvVarGuard {
    previous: Vec<(OsString, Option<OsString>)>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvVarGuard {
    /// Sets or removes environment variables for the guard lifetime.
    pub fn set_many(changes: &[(OsString, Option<OsString>)]) -> Self {
        let lock = env_lock();
        let mut previous = Vec::with_capacity(changes.len());

        for (key, value) in changes {
            previous.push((key.clone(), env::var_os(key)));
            unsafe {
                // SAFETY: the global mutex serializes environment mutations in tests.
                match value {
                    Some(new_value) => env::set_var(key, new_value),
                    None => env::remove_var(key),
                }
            }
        }

        Self {
            previous,
            _lock: lock,
        }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        for (key, value) in self.previous.drain(..) {
            unsafe {
                // SAFETY: the global mutex serializes environment mutations in tests.
                match value {
                    Some(previous) => env::set_var(&key, &previous),
                    None => env::remove_var(&key),
                }
            }
        }
    }
}

fn env_lock() -> MutexGuard<'static, ()> {
    ENV_MUTEX
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

//! Runtime configuration resolved from command-line flags and environment.

use camino::{Utf8Path, Utf8PathBuf};

use crate::task::adapters::yaml::DEFAULT_STORE_FILE;

/// Environment variable overriding the store location.
pub const STORE_ENV_VAR: &str = "CITRINE_STORE";

/// Resolved settings for a single invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    store_path: Utf8PathBuf,
}

impl Config {
    /// Creates a configuration using the given store path.
    #[must_use]
    pub fn new(store_path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            store_path: store_path.into(),
        }
    }

    /// Returns the path of the task store file.
    #[must_use]
    pub fn store_path(&self) -> &Utf8Path {
        &self.store_path
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_FILE)
    }
}

//! YAML file task store adapter.

mod models;
mod store;

pub use store::{DEFAULT_STORE_FILE, YamlFileTaskStore};

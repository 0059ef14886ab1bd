//! Citrine: a small personal task tracker.
//!
//! Tasks live in a YAML file (`.citrine.yml` by default) in the current
//! directory. Every command loads the whole list, changes it in memory, and
//! writes the whole list back.
//!
//! # Architecture
//!
//! Citrine follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: Concrete store implementations (YAML file, memory)
//!
//! # Modules
//!
//! - [`task`]: Task model, store port, adapters, and services
//! - [`cli`]: Command-line surface
//! - [`config`]: Resolved runtime settings
//! - [`telemetry`]: Logging set-up

pub mod cli;
pub mod config;
pub mod task;
pub mod telemetry;

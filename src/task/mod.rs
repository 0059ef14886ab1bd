//! Task management for Citrine.
//!
//! Tasks are added, listed, updated, and deleted through
//! [`services::TaskLifecycleService`], which performs a full load and full
//! save against a [`ports::TaskStore`] for every mutation. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

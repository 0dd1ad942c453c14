//! Configuration management for templatectl.
//!
//! This crate provides types and a loader for cluster connection
//! configuration from environment variables and explicit overrides.

mod loader;
mod types;

pub use loader::{ConfigError, ConfigLoader};
pub use types::{Config, ConnectionConfig};

//! Configuration
//!
//! Layered configuration: defaults, then an optional TOML file, then
//! `WIREBOX__`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, ContainerConfig, LoggingConfig};

//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns around the container.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`bootstrap`] | Registries configured from [`config::AppConfig`] |
//! | [`config`] | Figment-based configuration loading |
//! | [`constants`] | Centralized configuration constants |
//! | [`error_ext`] | Context extensions for foreign errors |
//! | [`logging`] | Structured logging with tracing |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use bootstrap::context_config;
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;

//! Container bootstrap from configuration

use tracing::debug;
use wirebox_container::ContextConfig;
use wirebox_domain::Result;

use crate::config::{AppConfig, ConfigLoader};

/// Empty registry honouring the configured re-binding policy
pub fn context_config(config: &AppConfig) -> ContextConfig {
    debug!(rebinding = ?config.container.rebinding, "Creating binding registry");
    ContextConfig::with_policy(config.container.rebinding)
}

/// Load configuration with `loader` and create a registry from it
pub fn load_context_config(loader: &ConfigLoader) -> Result<ContextConfig> {
    let config = loader.load()?;
    Ok(context_config(&config))
}

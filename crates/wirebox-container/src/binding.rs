//! Binding table entries

use std::sync::Arc;

use wirebox_domain::{ComponentKey, ComponentProvider};

/// A key bound to a provider
///
/// The dependency list is read from the provider once, when the binding is
/// created, and never re-derived.
#[derive(Debug, Clone)]
pub struct Binding {
    key: ComponentKey,
    provider: Arc<dyn ComponentProvider>,
    dependencies: Vec<ComponentKey>,
}

impl Binding {
    /// Bind `key` to `provider`
    pub fn new(key: ComponentKey, provider: Arc<dyn ComponentProvider>) -> Self {
        let dependencies = provider.dependencies().to_vec();
        Self {
            key,
            provider,
            dependencies,
        }
    }

    /// Bound key
    pub fn key(&self) -> &ComponentKey {
        &self.key
    }

    /// Bound provider
    pub fn provider(&self) -> &dyn ComponentProvider {
        self.provider.as_ref()
    }

    /// Declared dependencies, as captured at registration
    pub fn dependencies(&self) -> &[ComponentKey] {
        &self.dependencies
    }
}

//! Fixed-instance provider

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use wirebox_domain::{ComponentKey, ComponentProvider, Instance, ResolutionPath, Resolver, Result};

/// Provider returning a pre-built instance
#[derive(Clone)]
pub struct ValueProvider {
    instance: Instance,
}

impl ValueProvider {
    /// Wrap a typed value
    pub fn new<T: Any + Send + Sync>(value: Arc<T>) -> Self {
        Self { instance: value }
    }

    /// Wrap an already type-erased instance
    pub fn from_instance(instance: Instance) -> Self {
        Self { instance }
    }
}

impl ComponentProvider for ValueProvider {
    fn produce(&self, _resolver: &dyn Resolver, _path: &mut ResolutionPath) -> Result<Instance> {
        Ok(Arc::clone(&self.instance))
    }

    fn dependencies(&self) -> &[ComponentKey] {
        &[]
    }
}

impl fmt::Debug for ValueProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueProvider").finish_non_exhaustive()
    }
}

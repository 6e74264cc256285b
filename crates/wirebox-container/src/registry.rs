//! Binding registry
//!
//! [`ContextConfig`] is the mutable, build-time side of the container.
//! Bindings are added here and frozen into a [`Context`] by
//! [`ContextConfig::build`], which validates the whole graph first.

use std::any::Any;
use std::sync::Arc;

use indexmap::IndexMap;
use tracing::{debug, info, warn};
use wirebox_domain::{
    ComponentDescriptor, ComponentKey, ComponentProvider, Error, Instance, RebindingPolicy,
    Result,
};

use crate::binding::Binding;
use crate::context::Context;
use crate::graph::DependencyGraph;
use crate::provider::{ConstructiveProvider, ValueProvider};

/// Registry of component bindings
#[derive(Debug, Clone, Default)]
pub struct ContextConfig {
    bindings: IndexMap<ComponentKey, Binding>,
    policy: RebindingPolicy,
}

impl ContextConfig {
    /// Create an empty registry that rejects re-binding
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry with the given re-binding policy
    pub fn with_policy(policy: RebindingPolicy) -> Self {
        Self {
            bindings: IndexMap::new(),
            policy,
        }
    }

    /// Active re-binding policy
    pub fn policy(&self) -> RebindingPolicy {
        self.policy
    }

    /// Bind `key` to a fixed value
    ///
    /// Every resolution of `key` yields this same `Arc`.
    pub fn bind_value<T: Any + Send + Sync>(
        &mut self,
        key: ComponentKey,
        value: Arc<T>,
    ) -> Result<&mut Self> {
        self.bind_provider(key, Arc::new(ValueProvider::new(value)))
    }

    /// Bind `key` to an already type-erased instance
    pub fn bind_instance(&mut self, key: ComponentKey, instance: Instance) -> Result<&mut Self> {
        self.bind_provider(key, Arc::new(ValueProvider::from_instance(instance)))
    }

    /// Bind `key` to an implementation described by `descriptor`
    ///
    /// The construction path is selected now; an unusable descriptor fails
    /// with `IllegalComponent` and nothing is bound.
    pub fn bind_type(
        &mut self,
        key: ComponentKey,
        descriptor: ComponentDescriptor,
    ) -> Result<&mut Self> {
        let provider = ConstructiveProvider::from_descriptor(key.clone(), &descriptor)?;
        self.bind_provider(key, Arc::new(provider))
    }

    /// Bind `key` to a caller-supplied provider
    pub fn bind_provider(
        &mut self,
        key: ComponentKey,
        provider: Arc<dyn ComponentProvider>,
    ) -> Result<&mut Self> {
        if self.bindings.contains_key(&key) {
            match self.policy {
                RebindingPolicy::Reject => return Err(Error::already_bound(&key)),
                RebindingPolicy::Replace => warn!(component = %key, "Replacing existing binding"),
            }
        }

        let binding = Binding::new(key.clone(), provider);
        debug!(
            component = %key,
            dependencies = binding.dependencies().len(),
            "Registered binding"
        );
        self.bindings.insert(key, binding);
        Ok(self)
    }

    /// Whether `key` is bound
    pub fn contains(&self, key: &ComponentKey) -> bool {
        self.bindings.contains_key(key)
    }

    /// Binding registered for `key`
    pub fn binding(&self, key: &ComponentKey) -> Option<&Binding> {
        self.bindings.get(key)
    }

    /// Bound keys in registration order
    pub fn keys(&self) -> impl Iterator<Item = &ComponentKey> {
        self.bindings.keys()
    }

    /// Number of bindings
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether nothing is bound
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Validate the whole graph and freeze it into a [`Context`]
    ///
    /// On failure nothing is frozen and the registry is left as it was, so
    /// the configuration can be corrected and built again.
    pub fn build(&self) -> Result<Context> {
        DependencyGraph::new(&self.bindings).validate()?;
        info!(bindings = self.bindings.len(), "Context built");
        Ok(Context::new(self.bindings.clone()))
    }
}

//! Frozen, validated resolution context

use std::any::Any;
use std::sync::Arc;

use indexmap::IndexMap;
use tracing::trace;
use wirebox_domain::{ComponentKey, Error, Instance, ResolutionPath, Resolver, Result};

use crate::binding::Binding;
use crate::graph::DependencyGraph;

/// Immutable view over a validated binding table
///
/// Cheap to clone and safe to share between threads: the only per-call
/// state is the [`ResolutionPath`] each `get` creates for itself.
#[derive(Debug, Clone)]
pub struct Context {
    bindings: Arc<IndexMap<ComponentKey, Binding>>,
}

impl Context {
    pub(crate) fn new(bindings: IndexMap<ComponentKey, Binding>) -> Self {
        Self {
            bindings: Arc::new(bindings),
        }
    }

    /// Resolve `key`
    ///
    /// An unbound key yields `Ok(None)`. Type bindings produce a new object
    /// graph on every call; value bindings yield their stored instance.
    pub fn get(&self, key: &ComponentKey) -> Result<Option<Instance>> {
        self.resolve_in(key, &mut ResolutionPath::new())
    }

    /// Resolve `key` and downcast the product to `T`
    pub fn get_as<T: Any + Send + Sync>(&self, key: &ComponentKey) -> Result<Option<Arc<T>>> {
        match self.get(key)? {
            Some(instance) => instance
                .downcast::<T>()
                .map(Some)
                .map_err(|_| Error::instance_type::<T>(key)),
            None => Ok(None),
        }
    }

    /// Resolve the binding keyed by `T`'s own type name
    pub fn get_type<T: Any + Send + Sync>(&self) -> Result<Option<Arc<T>>> {
        self.get_as::<T>(&ComponentKey::of::<T>())
    }

    /// Whether `key` is bound
    pub fn contains(&self, key: &ComponentKey) -> bool {
        self.bindings.contains_key(key)
    }

    /// Bound keys in registration order
    pub fn keys(&self) -> impl Iterator<Item = &ComponentKey> {
        self.bindings.keys()
    }

    /// Declared dependencies of `key`, if bound
    pub fn dependencies_of(&self, key: &ComponentKey) -> Option<&[ComponentKey]> {
        self.bindings.get(key).map(Binding::dependencies)
    }

    /// Bound keys ordered so each follows all of its dependencies
    pub fn construction_order(&self) -> Result<Vec<ComponentKey>> {
        DependencyGraph::new(&self.bindings).construction_order()
    }

    /// Number of bindings
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether nothing is bound
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Resolver for Context {
    fn resolve_in(
        &self,
        key: &ComponentKey,
        path: &mut ResolutionPath,
    ) -> Result<Option<Instance>> {
        let Some(binding) = self.bindings.get(key) else {
            trace!(component = %key, "Component not bound");
            return Ok(None);
        };
        trace!(component = %key, depth = path.depth(), "Resolving component");
        path.within(key, |path| binding.provider().produce(self, path)).map(Some)
    }
}

//! Resolution capability handed to providers

use crate::error::Result;
use crate::value_objects::{ComponentKey, Instance, ResolutionPath};

/// Resolves component keys to instances
///
/// Providers receive a resolver to fetch their own dependencies. The
/// `path` argument belongs to the current `get` call and must be passed on
/// unchanged so re-entrant resolution can be detected.
///
/// Implementations enter `key` on the path before asking its provider to
/// produce (see [`ResolutionPath::within`]); that is what stops a provider
/// resolving its own key, directly or through others, from recursing
/// without end.
pub trait Resolver {
    /// Resolve `key`, returning `Ok(None)` when it is unbound
    fn resolve_in(&self, key: &ComponentKey, path: &mut ResolutionPath)
    -> Result<Option<Instance>>;
}

//! Provider port

use std::fmt;

use crate::error::Result;
use crate::ports::Resolver;
use crate::value_objects::{ComponentKey, Instance, ResolutionPath};

/// Capability to produce the instance bound to a key
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use wirebox_domain::{
///     ComponentKey, ComponentProvider, Instance, ResolutionPath, Resolver, Result,
/// };
///
/// #[derive(Debug)]
/// struct Answer;
///
/// impl ComponentProvider for Answer {
///     fn produce(&self, _: &dyn Resolver, _: &mut ResolutionPath) -> Result<Instance> {
///         Ok(Arc::new(42_u32))
///     }
///
///     fn dependencies(&self) -> &[ComponentKey] {
///         &[]
///     }
/// }
/// ```
pub trait ComponentProvider: Send + Sync + fmt::Debug {
    /// Produce an instance, resolving dependencies through `resolver`
    fn produce(&self, resolver: &dyn Resolver, path: &mut ResolutionPath) -> Result<Instance>;

    /// Declared dependency keys, in resolution order
    ///
    /// Must not construct anything.
    fn dependencies(&self) -> &[ComponentKey];
}

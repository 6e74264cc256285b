//! Call-local resolution path
//!
//! A [`ResolutionPath`] records the keys currently being resolved (or
//! validated) on one call stack. It is created per `get` call and threaded
//! explicitly through every provider, so two resolutions never observe each
//! other's state.

use crate::error::{Error, Result};
use crate::value_objects::ComponentKey;

/// Ordered stack of keys in resolution
#[derive(Debug, Clone, Default)]
pub struct ResolutionPath {
    stack: Vec<ComponentKey>,
}

impl ResolutionPath {
    /// Create an empty path
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `key`, failing if it is already being resolved
    ///
    /// The error names every key from the first occurrence of `key` to the
    /// top of the stack, i.e. exactly the members of the loop.
    pub fn enter(&mut self, key: &ComponentKey) -> Result<()> {
        if let Some(start) = self.stack.iter().position(|k| k == key) {
            return Err(Error::cyclic(self.stack[start..].to_vec()));
        }
        self.stack.push(key.clone());
        Ok(())
    }

    /// Remove `key` and every key entered after it
    ///
    /// Keys a provider entered but never left are discarded together with
    /// `key`. Leaving a key that is not on the path changes nothing.
    pub fn leave(&mut self, key: &ComponentKey) {
        if let Some(position) = self.stack.iter().rposition(|k| k == key) {
            self.stack.truncate(position);
        }
    }

    /// Run `resolve` with `key` entered on the path
    ///
    /// `key` is left again whether `resolve` succeeds or fails.
    pub fn within<T>(
        &mut self,
        key: &ComponentKey,
        resolve: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        self.enter(key)?;
        let resolved = resolve(self);
        self.leave(key);
        resolved
    }

    /// Whether `key` is currently being resolved
    pub fn contains(&self, key: &ComponentKey) -> bool {
        self.stack.contains(key)
    }

    /// Number of keys in resolution
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Whether no key is in resolution
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Keys in resolution, outermost first
    pub fn as_slice(&self) -> &[ComponentKey] {
        &self.stack
    }
}

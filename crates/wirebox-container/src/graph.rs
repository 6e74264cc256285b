//! Dependency graph validation
//!
//! The binding table is viewed as a directed graph where `A -> B` means
//! constructing `A` requires resolving `B`. The graph is never materialized;
//! it is walked on demand from the bindings' declared dependency lists.
//!
//! Validation is exhaustive: every binding is walked, not only the ones a
//! caller will request, so any bound component is guaranteed constructible.
//! Bindings are visited in registration order, which decides which cycle is
//! reported when several exist. The walk keeps its own stack, so the length
//! of a dependency chain is not bounded by the thread's call stack.

use std::collections::HashSet;
use std::slice;

use indexmap::IndexMap;
use tracing::debug;
use wirebox_domain::{ComponentKey, Error, Result};

use crate::binding::Binding;

/// Validator over a binding table
#[derive(Debug, Clone, Copy)]
pub struct DependencyGraph<'a> {
    bindings: &'a IndexMap<ComponentKey, Binding>,
}

/// Keys proven sound, in completion order
#[derive(Default)]
struct Walk<'a> {
    verified: HashSet<&'a ComponentKey>,
    order: Vec<&'a ComponentKey>,
}

/// A component on the current path and its dependencies not yet visited
struct Frame<'a> {
    component: &'a ComponentKey,
    pending: slice::Iter<'a, ComponentKey>,
}

impl<'a> DependencyGraph<'a> {
    /// View `bindings` as a dependency graph
    pub fn new(bindings: &'a IndexMap<ComponentKey, Binding>) -> Self {
        Self { bindings }
    }

    /// Check that every dependency is bound and no cycle exists
    ///
    /// Fails fast with `DependencyNotFound` or `CyclicDependencyFound`.
    pub fn validate(&self) -> Result<()> {
        self.walk().map(|_| ())
    }

    /// Keys ordered so every component follows all of its dependencies
    pub fn construction_order(&self) -> Result<Vec<ComponentKey>> {
        let walk = self.walk()?;
        Ok(walk.order.into_iter().cloned().collect())
    }

    fn walk(&self) -> Result<Walk<'a>> {
        debug!(bindings = self.bindings.len(), "Validating dependency graph");
        let mut walk = Walk::default();
        for (component, binding) in self.bindings {
            self.visit(component, binding, &mut walk)?;
        }
        Ok(walk)
    }

    /// Depth-first walk from `root` on an explicit stack
    fn visit(
        &self,
        root: &'a ComponentKey,
        binding: &'a Binding,
        walk: &mut Walk<'a>,
    ) -> Result<()> {
        if walk.verified.contains(root) {
            return Ok(());
        }

        let mut on_path = HashSet::from([root]);
        let mut stack = vec![Frame {
            component: root,
            pending: binding.dependencies().iter(),
        }];

        while let Some(frame) = stack.last_mut() {
            let component = frame.component;
            let Some(dependency) = frame.pending.next() else {
                // every key reachable from here is bound and acyclic
                stack.pop();
                on_path.remove(component);
                walk.verified.insert(component);
                walk.order.push(component);
                continue;
            };

            let Some((bound, next)) = self.bindings.get_key_value(dependency) else {
                return Err(Error::dependency_not_found(dependency, component));
            };
            if walk.verified.contains(bound) {
                continue;
            }
            if on_path.contains(bound) {
                return Err(cycle_from(&stack, bound));
            }

            on_path.insert(bound);
            stack.push(Frame {
                component: bound,
                pending: next.dependencies().iter(),
            });
        }
        Ok(())
    }
}

/// Cycle made of `start` and every frame above it
fn cycle_from(stack: &[Frame<'_>], start: &ComponentKey) -> Error {
    let first = stack
        .iter()
        .position(|frame| frame.component == start)
        .unwrap_or_default();
    Error::cyclic(
        stack[first..]
            .iter()
            .map(|frame| frame.component.clone())
            .collect(),
    )
}

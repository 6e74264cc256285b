//! Resolved constructor arguments

use std::any::Any;
use std::sync::Arc;

use thiserror::Error;

use crate::value_objects::{ComponentKey, Instance};

/// Failure while reading constructor arguments
#[derive(Error, Debug)]
pub enum ArgumentError {
    /// The constructor asked for more arguments than it declared
    #[error("constructor requested more arguments than it declared")]
    Exhausted,

    /// The argument is not of the requested type
    #[error("argument {key} is not an instance of {expected}")]
    TypeMismatch {
        /// Key the argument was resolved from
        key: ComponentKey,
        /// Requested type name
        expected: &'static str,
    },
}

/// Resolved constructor arguments, in declared parameter order
#[derive(Debug)]
pub struct Arguments {
    values: std::vec::IntoIter<(ComponentKey, Instance)>,
}

impl Arguments {
    /// Wrap resolved `(parameter, instance)` pairs
    pub fn new(values: Vec<(ComponentKey, Instance)>) -> Self {
        Self {
            values: values.into_iter(),
        }
    }

    /// Take the next argument as a `T`
    pub fn next<T: Any + Send + Sync>(&mut self) -> Result<Arc<T>, ArgumentError> {
        let (key, instance) = self.values.next().ok_or(ArgumentError::Exhausted)?;
        instance
            .downcast::<T>()
            .map_err(|_| ArgumentError::TypeMismatch {
                key,
                expected: std::any::type_name::<T>(),
            })
    }

    /// Take the next argument without downcasting
    pub fn next_instance(&mut self) -> Result<Instance, ArgumentError> {
        self.values
            .next()
            .map(|(_, instance)| instance)
            .ok_or(ArgumentError::Exhausted)
    }

    /// Number of arguments not yet taken
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

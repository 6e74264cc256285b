//! Construction paths

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use super::Arguments;
use crate::error::BoxError;
use crate::value_objects::ComponentKey;

type BuildFn =
    dyn Fn(&mut Arguments) -> Result<Box<dyn Any + Send + Sync>, BoxError> + Send + Sync;

/// One way of constructing an implementation type
///
/// A constructor lists the keys of its parameters in declared order. It is
/// either marked injectable (the container may pick it) or plain, in which
/// case it is only used as the zero-argument fallback.
#[derive(Clone)]
pub struct Constructor {
    parameters: Vec<ComponentKey>,
    injectable: bool,
    build: Arc<BuildFn>,
}

impl Constructor {
    /// Constructor marked for injection
    pub fn injectable<T, F>(parameters: impl IntoIterator<Item = ComponentKey>, build: F) -> Self
    where
        T: Any + Send + Sync,
        F: Fn(&mut Arguments) -> Result<T, BoxError> + Send + Sync + 'static,
    {
        Self::with_marker(parameters, true, build)
    }

    /// Constructor not marked for injection
    pub fn plain<T, F>(parameters: impl IntoIterator<Item = ComponentKey>, build: F) -> Self
    where
        T: Any + Send + Sync,
        F: Fn(&mut Arguments) -> Result<T, BoxError> + Send + Sync + 'static,
    {
        Self::with_marker(parameters, false, build)
    }

    /// Zero-argument constructor backed by `T::default()`
    pub fn default_of<T>() -> Self
    where
        T: Default + Any + Send + Sync,
    {
        Self::plain(Vec::new(), |_| Ok(T::default()))
    }

    fn with_marker<T, F>(
        parameters: impl IntoIterator<Item = ComponentKey>,
        injectable: bool,
        build: F,
    ) -> Self
    where
        T: Any + Send + Sync,
        F: Fn(&mut Arguments) -> Result<T, BoxError> + Send + Sync + 'static,
    {
        Self {
            parameters: parameters.into_iter().collect(),
            injectable,
            build: Arc::new(move |args: &mut Arguments| {
                build(args).map(|value| Box::new(value) as Box<dyn Any + Send + Sync>)
            }),
        }
    }

    /// Parameter keys in declared order
    pub fn parameters(&self) -> &[ComponentKey] {
        &self.parameters
    }

    /// Whether the constructor is marked for injection
    pub fn is_injectable(&self) -> bool {
        self.injectable
    }

    /// Whether the constructor takes no parameters
    pub fn is_zero_arg(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Run the constructor with resolved arguments
    pub fn invoke(&self, mut arguments: Arguments) -> Result<Box<dyn Any + Send + Sync>, BoxError> {
        (self.build)(&mut arguments)
    }
}

impl fmt::Debug for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constructor")
            .field("parameters", &self.parameters)
            .field("injectable", &self.injectable)
            .finish_non_exhaustive()
    }
}

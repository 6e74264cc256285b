//! Error handling types

use std::collections::BTreeSet;
use std::fmt;

use thiserror::Error;

use crate::value_objects::ComponentKey;

/// Boxed error used for failures raised by caller-supplied closures
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Why a descriptor could not be turned into a construction path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalReason {
    /// More than one constructor is marked injectable
    AmbiguousConstructors {
        /// Number of injectable constructors found
        count: usize,
    },
    /// No injectable constructor and no zero-argument fallback
    NoEligibleConstructor,
}

impl fmt::Display for IllegalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AmbiguousConstructors { count } => {
                write!(f, "{count} injectable constructors declared, expected at most one")
            }
            Self::NoEligibleConstructor => {
                f.write_str("no injectable constructor and no zero-argument constructor")
            }
        }
    }
}

/// Main error type for wirebox
#[derive(Error, Debug)]
pub enum Error {
    /// Implementation type has no single usable construction path
    #[error("Illegal component {component}: {reason}")]
    IllegalComponent {
        /// Key the implementation was being bound to
        component: ComponentKey,
        /// Why the descriptor was rejected
        reason: IllegalReason,
    },

    /// A declared dependency has no binding
    #[error("Dependency {dependency} required by {component} is not bound")]
    DependencyNotFound {
        /// The missing dependency
        dependency: ComponentKey,
        /// The component that declared it
        component: ComponentKey,
    },

    /// Dependency edges form a closed loop
    #[error("Cyclic dependency found: {}", render_cycle(.components))]
    CyclicDependencyFound {
        /// Every key on the cycle, in traversal order
        components: Vec<ComponentKey>,
    },

    /// Key registered twice while re-binding is rejected
    #[error("Component {component} is already bound")]
    AlreadyBound {
        /// The duplicated key
        component: ComponentKey,
    },

    /// Constructor or field injection failed
    #[error("Failed to construct {component}: {source}")]
    Construction {
        /// The component being constructed
        component: ComponentKey,
        /// Underlying cause
        #[source]
        source: BoxError,
    },

    /// Produced instance is not of the requested type
    #[error("Component {component} is not an instance of {expected}")]
    InstanceType {
        /// The resolved component
        component: ComponentKey,
        /// Requested type name
        expected: &'static str,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },
}

fn render_cycle(components: &[ComponentKey]) -> String {
    let mut rendered: Vec<&str> = components.iter().map(ComponentKey::as_str).collect();
    if let Some(first) = rendered.first().copied() {
        rendered.push(first);
    }
    rendered.join(" -> ")
}

// Container error creation methods
impl Error {
    /// Create an illegal component error
    pub fn illegal_component(component: &ComponentKey, reason: IllegalReason) -> Self {
        Self::IllegalComponent {
            component: component.clone(),
            reason,
        }
    }

    /// Create a dependency not found error
    pub fn dependency_not_found(dependency: &ComponentKey, component: &ComponentKey) -> Self {
        Self::DependencyNotFound {
            dependency: dependency.clone(),
            component: component.clone(),
        }
    }

    /// Create a cyclic dependency error
    pub fn cyclic(components: Vec<ComponentKey>) -> Self {
        Self::CyclicDependencyFound { components }
    }

    /// Create an already bound error
    pub fn already_bound(component: &ComponentKey) -> Self {
        Self::AlreadyBound {
            component: component.clone(),
        }
    }

    /// Create a construction error preserving its cause
    pub fn construction(component: &ComponentKey, source: impl Into<BoxError>) -> Self {
        Self::Construction {
            component: component.clone(),
            source: source.into(),
        }
    }

    /// Create an instance type mismatch error
    pub fn instance_type<T: ?Sized>(component: &ComponentKey) -> Self {
        Self::InstanceType {
            component: component.clone(),
            expected: std::any::type_name::<T>(),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl Error {
    /// Members of a reported cycle, if this is a cycle error
    pub fn cycle_members(&self) -> Option<BTreeSet<&ComponentKey>> {
        match self {
            Self::CyclicDependencyFound { components } => Some(components.iter().collect()),
            _ => None,
        }
    }
}

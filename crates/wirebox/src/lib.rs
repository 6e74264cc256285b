//! # wirebox
//!
//! A small dependency-injection container: bind values and component
//! types under keys, validate the whole dependency graph once, then
//! resolve fully constructed components by key.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use wirebox::prelude::*;
//!
//! #[derive(Debug, Default)]
//! struct Clock;
//!
//! struct Scheduler {
//!     clock: Arc<Clock>,
//! }
//!
//! let mut config = ContextConfig::new();
//! config
//!     .bind_type(
//!         ComponentKey::of::<Clock>(),
//!         ComponentDescriptor::of::<Clock>().constructor(Constructor::default_of::<Clock>()),
//!     )?
//!     .bind_type(
//!         ComponentKey::of::<Scheduler>(),
//!         ComponentDescriptor::of::<Scheduler>().constructor(Constructor::injectable(
//!             [ComponentKey::of::<Clock>()],
//!             |args| Ok(Scheduler { clock: args.next::<Clock>()? }),
//!         )),
//!     )?;
//!
//! let context = config.build()?;
//! assert!(context.get_type::<Scheduler>()?.is_some());
//! # Ok::<(), Error>(())
//! ```
//!
//! ## Architecture
//!
//! - `domain` - keys, errors, component descriptors and port traits
//! - `container` - binding registry, graph validator, providers and context
//! - `infrastructure` - configuration, logging and bootstrap helpers

/// Domain layer - keys, errors and descriptors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use wirebox_domain::*;
}

/// Container layer - registry, validation and resolution
///
/// Re-exports from the container crate for convenience
pub mod container {
    pub use wirebox_container::*;
}

/// Infrastructure layer - config, logging and bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use wirebox_infrastructure::*;
}

/// Types needed to register and resolve components
pub mod prelude {
    pub use wirebox_container::{Context, ContextConfig};
    pub use wirebox_domain::{
        Arguments, BoxError, ComponentDescriptor, ComponentKey, Constructor, Error,
        FieldInjection, Instance, RebindingPolicy, Result,
    };
}

// Re-export commonly used types at the crate root
pub use container::{Context, ContextConfig};
pub use domain::*;

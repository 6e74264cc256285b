//! # Container
//!
//! Binding registry, dependency graph validation and the construction
//! pipeline.
//!
//! ```text
//! ContextConfig ──bind_*──▶ Binding { key, provider, dependencies }
//!       │
//!     build() ──▶ DependencyGraph::validate (missing keys, cycles)
//!       │
//!       ▼
//!   Context ──get(key)──▶ provider.produce(context, path)
//! ```
//!
//! ## Usage
//!
//! ```
//! use std::sync::Arc;
//! use wirebox_container::ContextConfig;
//! use wirebox_domain::{ComponentDescriptor, ComponentKey, Constructor};
//!
//! struct Greeter {
//!     name: Arc<String>,
//! }
//!
//! let mut config = ContextConfig::new();
//! config.bind_value(ComponentKey::new("name"), Arc::new(String::from("world")))?;
//! config.bind_type(
//!     ComponentKey::of::<Greeter>(),
//!     ComponentDescriptor::of::<Greeter>().constructor(Constructor::injectable(
//!         [ComponentKey::new("name")],
//!         |args| Ok(Greeter { name: args.next::<String>()? }),
//!     )),
//! )?;
//!
//! let context = config.build()?;
//! let greeter = context.get_type::<Greeter>()?.expect("bound");
//! assert_eq!(greeter.name.as_str(), "world");
//! # Ok::<(), wirebox_domain::Error>(())
//! ```

pub mod binding;
pub mod context;
pub mod graph;
pub mod provider;
pub mod registry;

pub use binding::Binding;
pub use context::Context;
pub use graph::DependencyGraph;
pub use provider::{ConstructionRecipe, ConstructiveProvider, ValueProvider};
pub use registry::ContextConfig;

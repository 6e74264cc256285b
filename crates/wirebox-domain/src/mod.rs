//! # Domain Layer
//!
//! Core types shared by every wirebox crate: component keys, component
//! descriptors, the resolution path, the error taxonomy and the provider
//! ports implemented by the container.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`descriptor`] | Constructor and field-injection metadata for implementation types |
//! | [`error`] | Error taxonomy and `Result` alias |
//! | [`ports`] | `ComponentProvider` and `Resolver` traits |
//! | [`value_objects`] | `ComponentKey`, `ResolutionPath`, `RebindingPolicy` |

pub mod descriptor;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use descriptor::{Arguments, ComponentDescriptor, Constructor, FieldInjection, TypeLayer};
pub use error::{BoxError, Error, IllegalReason, Result};
pub use ports::{ComponentProvider, Resolver};
pub use value_objects::{ComponentKey, Instance, RebindingPolicy, ResolutionPath};

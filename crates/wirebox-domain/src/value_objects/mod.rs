//! Value objects shared across the container

mod key;
mod policy;
mod resolution;

pub use key::{ComponentKey, Instance};
pub use policy::RebindingPolicy;
pub use resolution::ResolutionPath;

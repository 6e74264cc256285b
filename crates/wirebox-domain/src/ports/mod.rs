//! Port traits implemented by the container crate

mod provider;
mod resolver;

pub use provider::ComponentProvider;
pub use resolver::Resolver;

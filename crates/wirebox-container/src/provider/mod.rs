//! Provider implementations
//!
//! | Provider | Dependencies | Product |
//! |----------|--------------|---------|
//! | [`ValueProvider`] | none | the same stored instance every time |
//! | [`ConstructiveProvider`] | constructor parameters, then fields | a new instance per call |

mod constructive;
mod value;

pub use constructive::{ConstructionRecipe, ConstructiveProvider};
pub use value::ValueProvider;

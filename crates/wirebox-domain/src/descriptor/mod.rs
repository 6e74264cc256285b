//! Component descriptors
//!
//! A [`ComponentDescriptor`] is the statically supplied replacement for
//! reflection: it lists the constructors an implementation type offers and
//! the injectable fields declared on the type and on each of its ancestor
//! layers. The container never inspects types itself; it only consumes the
//! ordered dependency keys a descriptor resolves to.
//!
//! ```
//! use std::sync::Arc;
//! use wirebox_domain::{ComponentDescriptor, ComponentKey, Constructor, FieldInjection};
//!
//! struct Engine;
//! struct Car {
//!     engine: Arc<Engine>,
//!     radio: Option<Arc<String>>,
//! }
//!
//! let descriptor = ComponentDescriptor::of::<Car>()
//!     .constructor(Constructor::injectable([ComponentKey::of::<Engine>()], |args| {
//!         Ok(Car { engine: args.next::<Engine>()?, radio: None })
//!     }))
//!     .field(FieldInjection::new("radio", ComponentKey::new("radio"), |car: &mut Car, radio| {
//!         car.radio = Some(radio);
//!     }));
//!
//! assert_eq!(descriptor.dependencies().unwrap().len(), 2);
//! ```

mod arguments;
mod constructor;
mod field;

pub use arguments::{ArgumentError, Arguments};
pub use constructor::Constructor;
pub use field::FieldInjection;

use crate::error::IllegalReason;
use crate::value_objects::ComponentKey;

/// Injectable fields declared by one level of a type's ancestry
#[derive(Debug, Clone)]
pub struct TypeLayer {
    name: String,
    fields: Vec<FieldInjection>,
}

impl TypeLayer {
    /// Layer for the type called `name`
    pub fn new(name: impl Into<String>, fields: impl IntoIterator<Item = FieldInjection>) -> Self {
        Self {
            name: name.into(),
            fields: fields.into_iter().collect(),
        }
    }

    /// Type name of the layer
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fields declared on this layer
    pub fn fields(&self) -> &[FieldInjection] {
        &self.fields
    }
}

/// Construction metadata for one implementation type
#[derive(Debug, Clone)]
pub struct ComponentDescriptor {
    constructors: Vec<Constructor>,
    layers: Vec<TypeLayer>,
}

impl ComponentDescriptor {
    /// Descriptor for the type called `type_name`
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            constructors: Vec::new(),
            layers: vec![TypeLayer::new(type_name, [])],
        }
    }

    /// Descriptor named after `T`
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::new(std::any::type_name::<T>())
    }

    /// Add a candidate constructor
    #[must_use]
    pub fn constructor(mut self, constructor: Constructor) -> Self {
        self.constructors.push(constructor);
        self
    }

    /// Add an injectable field declared on the type itself
    #[must_use]
    pub fn field(mut self, field: FieldInjection) -> Self {
        self.layers[0].fields.push(field);
        self
    }

    /// Append the next ancestor layer and its injectable fields
    ///
    /// Ancestors are added nearest first; the universal root is never
    /// listed.
    #[must_use]
    pub fn ancestor(
        mut self,
        name: impl Into<String>,
        fields: impl IntoIterator<Item = FieldInjection>,
    ) -> Self {
        self.layers.push(TypeLayer::new(name, fields));
        self
    }

    /// Name of the implementation type
    pub fn type_name(&self) -> &str {
        self.layers[0].name()
    }

    /// Candidate constructors, in declaration order
    pub fn constructors(&self) -> &[Constructor] {
        &self.constructors
    }

    /// The type's own layer followed by its ancestors
    pub fn layers(&self) -> &[TypeLayer] {
        &self.layers
    }

    /// Pick the construction path
    ///
    /// Exactly one injectable constructor wins. With none, a zero-argument
    /// constructor is used as fallback.
    pub fn select_constructor(&self) -> Result<&Constructor, IllegalReason> {
        let mut injectable = self.constructors.iter().filter(|c| c.is_injectable());
        match (injectable.next(), injectable.count()) {
            (Some(constructor), 0) => Ok(constructor),
            (Some(_), others) => Err(IllegalReason::AmbiguousConstructors { count: others + 1 }),
            (None, _) => self
                .constructors
                .iter()
                .find(|c| c.is_zero_arg())
                .ok_or(IllegalReason::NoEligibleConstructor),
        }
    }

    /// Injectable fields, own layer first then each ancestor
    pub fn injection_fields(&self) -> impl Iterator<Item = &FieldInjection> {
        self.layers.iter().flat_map(|layer| layer.fields.iter())
    }

    /// Ordered dependency keys: constructor parameters, then fields
    pub fn dependencies(&self) -> Result<Vec<ComponentKey>, IllegalReason> {
        let constructor = self.select_constructor()?;
        Ok(constructor
            .parameters()
            .iter()
            .chain(self.injection_fields().map(FieldInjection::key))
            .cloned()
            .collect())
    }
}

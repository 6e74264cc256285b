//! Field injection targets

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::error::BoxError;
use crate::value_objects::{ComponentKey, Instance};

type InjectFn =
    dyn Fn(&mut (dyn Any + Send + Sync), Instance) -> Result<(), BoxError> + Send + Sync;

/// An injectable field of an implementation type
///
/// The assignment closure receives the freshly constructed object and the
/// resolved dependency. For fields declared on an ancestor layer the closure
/// reaches through the embedding (e.g. `|car, engine| car.base.engine = ...`).
#[derive(Clone)]
pub struct FieldInjection {
    name: &'static str,
    key: ComponentKey,
    inject: Arc<InjectFn>,
}

impl FieldInjection {
    /// Field `name` of `T`, populated from `key` as an `Arc<D>`
    pub fn new<T, D, F>(name: &'static str, key: ComponentKey, assign: F) -> Self
    where
        T: Any + Send + Sync,
        D: Any + Send + Sync,
        F: Fn(&mut T, Arc<D>) + Send + Sync + 'static,
    {
        let dependency = key.clone();
        Self {
            name,
            key,
            inject: Arc::new(
                move |target: &mut (dyn Any + Send + Sync),
                      instance: Instance|
                      -> Result<(), BoxError> {
                    let target = target.downcast_mut::<T>().ok_or_else(|| {
                        format!(
                            "field {name} belongs to {}, not to the constructed object",
                            std::any::type_name::<T>()
                        )
                    })?;
                    let value = instance.downcast::<D>().map_err(|_| {
                        format!(
                            "field {name} expects {} but {dependency} resolved to another type",
                            std::any::type_name::<D>()
                        )
                    })?;
                    assign(target, value);
                    Ok(())
                },
            ),
        }
    }

    /// Field name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Key the field is populated from
    pub fn key(&self) -> &ComponentKey {
        &self.key
    }

    /// Assign `value` onto `target`
    pub fn inject(
        &self,
        target: &mut (dyn Any + Send + Sync),
        value: Instance,
    ) -> Result<(), BoxError> {
        (self.inject)(target, value)
    }
}

impl fmt::Debug for FieldInjection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldInjection")
            .field("name", &self.name)
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

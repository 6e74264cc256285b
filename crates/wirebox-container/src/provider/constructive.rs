//! Constructor and field injection provider

use std::any::Any;

use tracing::trace;
use wirebox_domain::{
    Arguments, ComponentDescriptor, ComponentKey, ComponentProvider, Constructor, Error,
    FieldInjection, Instance, ResolutionPath, Resolver, Result,
};

/// Construction path fixed at registration time
#[derive(Debug, Clone)]
pub struct ConstructionRecipe {
    implementation: String,
    constructor: Constructor,
    fields: Vec<FieldInjection>,
    dependencies: Vec<ComponentKey>,
}

impl ConstructionRecipe {
    /// Select the construction path of `descriptor` for `component`
    ///
    /// Fails with `IllegalComponent` when the descriptor has several
    /// injectable constructors, or none and no zero-argument fallback.
    pub fn from_descriptor(
        component: &ComponentKey,
        descriptor: &ComponentDescriptor,
    ) -> Result<Self> {
        let illegal = |reason| Error::illegal_component(component, reason);
        let constructor = descriptor.select_constructor().map_err(illegal)?;
        Ok(Self {
            implementation: descriptor.type_name().to_owned(),
            constructor: constructor.clone(),
            fields: descriptor.injection_fields().cloned().collect(),
            dependencies: descriptor.dependencies().map_err(illegal)?,
        })
    }

    /// Name of the implementation type
    pub fn implementation(&self) -> &str {
        &self.implementation
    }

    /// Selected constructor
    pub fn constructor(&self) -> &Constructor {
        &self.constructor
    }

    /// Fields injected after construction
    pub fn fields(&self) -> &[FieldInjection] {
        &self.fields
    }

    /// Constructor parameters followed by field keys
    pub fn dependencies(&self) -> &[ComponentKey] {
        &self.dependencies
    }
}

/// Provider that builds a new instance on every call
#[derive(Debug)]
pub struct ConstructiveProvider {
    component: ComponentKey,
    recipe: ConstructionRecipe,
}

impl ConstructiveProvider {
    /// Provider for `component` built with `recipe`
    pub fn new(component: ComponentKey, recipe: ConstructionRecipe) -> Self {
        Self { component, recipe }
    }

    /// Provider for `component` built from `descriptor`
    pub fn from_descriptor(
        component: ComponentKey,
        descriptor: &ComponentDescriptor,
    ) -> Result<Self> {
        let recipe = ConstructionRecipe::from_descriptor(&component, descriptor)?;
        Ok(Self::new(component, recipe))
    }

    /// Key this provider is bound to
    pub fn component(&self) -> &ComponentKey {
        &self.component
    }

    /// The fixed construction path
    pub fn recipe(&self) -> &ConstructionRecipe {
        &self.recipe
    }

    fn construct(&self, resolver: &dyn Resolver, path: &mut ResolutionPath) -> Result<Instance> {
        let parameters = self.recipe.constructor.parameters();
        let mut arguments = Vec::with_capacity(parameters.len());
        for key in parameters {
            arguments.push((key.clone(), self.dependency(key, resolver, path)?));
        }

        let mut object: Box<dyn Any + Send + Sync> = self
            .recipe
            .constructor
            .invoke(Arguments::new(arguments))
            .map_err(|source| Error::construction(&self.component, source))?;

        for field in &self.recipe.fields {
            let value = self.dependency(field.key(), resolver, path)?;
            field
                .inject(object.as_mut(), value)
                .map_err(|source| Error::construction(&self.component, source))?;
        }

        Ok(Instance::from(object))
    }

    fn dependency(
        &self,
        key: &ComponentKey,
        resolver: &dyn Resolver,
        path: &mut ResolutionPath,
    ) -> Result<Instance> {
        resolver
            .resolve_in(key, path)?
            .ok_or_else(|| Error::dependency_not_found(key, &self.component))
    }
}

impl ComponentProvider for ConstructiveProvider {
    fn produce(&self, resolver: &dyn Resolver, path: &mut ResolutionPath) -> Result<Instance> {
        trace!(
            component = %self.component,
            implementation = %self.recipe.implementation,
            depth = path.depth(),
            "Constructing component"
        );
        self.construct(resolver, path)
    }

    fn dependencies(&self) -> &[ComponentKey] {
        self.recipe.dependencies()
    }
}


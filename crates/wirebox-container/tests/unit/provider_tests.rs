//! Tests for providers resolved without build-time validation

use std::sync::Arc;

use wirebox_container::{ConstructiveProvider, ValueProvider};
use wirebox_domain::{
    ComponentDescriptor, ComponentKey, ComponentProvider, Constructor, Error, FieldInjection,
    ResolutionPath, Resolver,
};

use crate::test_utils::{Engine, UncheckedResolver, key, node, truck_descriptor};

fn constructive(
    name: &'static str,
    descriptor: &ComponentDescriptor,
) -> Arc<dyn ComponentProvider> {
    Arc::new(ConstructiveProvider::from_descriptor(key(name), descriptor).unwrap())
}

#[test]
fn test_value_provider_returns_same_instance() {
    let engine = Arc::new(Engine);
    let provider = ValueProvider::new(engine.clone());
    let resolver = UncheckedResolver::default();

    let first = provider.produce(&resolver, &mut ResolutionPath::new()).unwrap();
    let second = provider.produce(&resolver, &mut ResolutionPath::new()).unwrap();

    assert!(Arc::ptr_eq(&first.downcast::<Engine>().unwrap(), &engine));
    assert!(Arc::ptr_eq(&second.downcast::<Engine>().unwrap(), &engine));
    assert!(provider.dependencies().is_empty());
}

#[test]
fn test_constructive_dependencies_are_parameters_then_fields() {
    let descriptor = ComponentDescriptor::new("Gauge")
        .constructor(Constructor::injectable([key("a"), key("b")], |_| Ok(Engine)))
        .field(FieldInjection::new("c", key("c"), |_: &mut Engine, _: Arc<Engine>| {}))
        .ancestor(
            "Base",
            [FieldInjection::new("d", key("d"), |_: &mut Engine, _: Arc<Engine>| {})],
        );
    let provider = ConstructiveProvider::from_descriptor(key("Gauge"), &descriptor).unwrap();

    assert_eq!(
        provider.dependencies(),
        &[key("a"), key("b"), key("c"), key("d")]
    );
    assert_eq!(provider.dependencies(), descriptor.dependencies().unwrap());
    assert_eq!(provider.component(), &key("Gauge"));
    assert_eq!(provider.recipe().implementation(), "Gauge");
    assert_eq!(provider.recipe().fields().len(), 2);
}

#[test]
fn test_reentrancy_guard_stops_unvalidated_cycle() {
    let resolver = UncheckedResolver::default()
        .with(key("A"), constructive("A", &node("A", &["B"])))
        .with(key("B"), constructive("B", &node("B", &["A"])));

    let error = resolver.get(&key("A")).unwrap_err();
    let members = error.cycle_members().expect("cycle error");
    assert!(members.contains(&key("A")));
    assert!(members.contains(&key("B")));
}

#[test]
fn test_guard_is_released_after_failure() {
    let resolver =
        UncheckedResolver::default().with(key("A"), constructive("A", &node("A", &["B"])));

    // a missing dependency must not leave A marked as in construction
    for _ in 0..2 {
        match resolver.get(&key("A")).unwrap_err() {
            Error::DependencyNotFound {
                dependency,
                component,
            } => {
                assert_eq!(dependency, key("B"));
                assert_eq!(component, key("A"));
            }
            other => panic!("Expected DependencyNotFound, got {other:?}"),
        }
    }
}

#[test]
fn test_path_is_balanced_after_resolution() {
    let resolver = UncheckedResolver::default()
        .with(key("A"), constructive("A", &node("A", &["B"])))
        .with(key("B"), constructive("B", &node("B", &[])))
        .with(key("C"), constructive("C", &node("C", &["missing"])));
    let mut path = ResolutionPath::new();

    resolver.resolve_in(&key("A"), &mut path).unwrap();
    assert!(path.is_empty());
    resolver.resolve_in(&key("C"), &mut path).unwrap_err();
    assert!(path.is_empty());
}

#[test]
fn test_constructor_failure_is_wrapped() {
    let descriptor = ComponentDescriptor::new("Faulty").constructor(Constructor::injectable(
        Vec::new(),
        |_| -> Result<Engine, wirebox_domain::BoxError> { Err("no fuel".into()) },
    ));
    let resolver = UncheckedResolver::default()
        .with(key("Faulty"), constructive("Faulty", &descriptor));

    match resolver.get(&key("Faulty")).unwrap_err() {
        Error::Construction { component, source } => {
            assert_eq!(component, key("Faulty"));
            assert_eq!(source.to_string(), "no fuel");
        }
        other => panic!("Expected Construction, got {other:?}"),
    }
}

#[test]
fn test_field_type_mismatch_is_a_construction_error() {
    let resolver = UncheckedResolver::default()
        .with(key("Truck"), constructive("Truck", &truck_descriptor()))
        .with(key("cargo"), Arc::new(ValueProvider::new(Arc::new(42_u32))))
        .with(
            ComponentKey::of::<Engine>(),
            Arc::new(ValueProvider::new(Arc::new(Engine))),
        );

    let error = resolver.get(&key("Truck")).unwrap_err();
    assert!(matches!(error, Error::Construction { component, .. } if component == key("Truck")));
}

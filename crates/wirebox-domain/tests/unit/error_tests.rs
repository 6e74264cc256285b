//! Unit tests for domain error types

use wirebox_domain::{ComponentKey, Error, IllegalReason};

#[test]
fn test_dependency_not_found_names_both_keys() {
    let error = Error::dependency_not_found(&ComponentKey::new("B"), &ComponentKey::new("A"));
    match &error {
        Error::DependencyNotFound {
            dependency,
            component,
        } => {
            assert_eq!(dependency.as_str(), "B");
            assert_eq!(component.as_str(), "A");
        }
        _ => panic!("Expected DependencyNotFound error"),
    }
    assert_eq!(error.to_string(), "Dependency B required by A is not bound");
}

#[test]
fn test_cycle_display_closes_the_loop() {
    let error = Error::cyclic(vec![
        ComponentKey::new("A"),
        ComponentKey::new("B"),
        ComponentKey::new("C"),
    ]);
    assert_eq!(error.to_string(), "Cyclic dependency found: A -> B -> C -> A");
}

#[test]
fn test_cycle_members() {
    let a = ComponentKey::new("A");
    let b = ComponentKey::new("B");
    let error = Error::cyclic(vec![b.clone(), a.clone()]);
    let members = error.cycle_members().expect("cycle error");
    assert_eq!(members.len(), 2);
    assert!(members.contains(&a));
    assert!(members.contains(&b));

    assert!(Error::already_bound(&a).cycle_members().is_none());
}

#[test]
fn test_illegal_component_reason() {
    let error = Error::illegal_component(
        &ComponentKey::new("Car"),
        IllegalReason::AmbiguousConstructors { count: 2 },
    );
    let display = error.to_string();
    assert!(display.contains("Car"));
    assert!(display.contains("2 injectable constructors"));
}

#[test]
fn test_construction_preserves_source() {
    let error = Error::construction(&ComponentKey::new("Car"), "engine exploded");
    match &error {
        Error::Construction { component, source } => {
            assert_eq!(component.as_str(), "Car");
            assert_eq!(source.to_string(), "engine exploded");
        }
        _ => panic!("Expected Construction error"),
    }
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn test_configuration_error() {
    let error = Error::configuration("bad level");
    match error {
        Error::Configuration { message, source } => {
            assert_eq!(message, "bad level");
            assert!(source.is_none());
        }
        _ => panic!("Expected Configuration error"),
    }
}

#[test]
fn test_instance_type_names_expected_type() {
    let error = Error::instance_type::<String>(&ComponentKey::new("name"));
    assert!(error.to_string().contains("alloc::string::String"));
}

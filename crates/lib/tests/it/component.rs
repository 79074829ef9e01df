//! Component integration tests

use hl7tree::{Component, ComponentError, Error, SubComponent};

use crate::helpers::*;

#[test]
fn test_subcomponents_in_order() {
    let component = component("1234&&ISO&X");

    let values: Vec<_> = component
        .subcomponents()
        .iter()
        .map(SubComponent::value)
        .collect();
    assert_eq!(values, vec!["1234", "", "ISO", "X"]);
    assert!(component.is_subcomponentized());
}

#[test]
fn test_repetition_and_component_delimiters_are_literal_here() {
    let component = component("A^B~C");

    assert_eq!(component.subcomponents().len(), 1);
    assert_eq!(component.subcomponent(1).unwrap().value(), "A^B~C");
}

#[test]
fn test_subcomponent_not_available() {
    let component = component("A&B");
    let err = component.subcomponent(3).unwrap_err();

    assert_eq!(
        err,
        ComponentError::SubComponentNotAvailable {
            position: 3,
            count: 2
        }
    );

    let err: Error = err.into();
    assert_eq!(err.module(), "component");
    assert!(err.is_not_found());
}

#[test]
fn test_reassignment_rebuilds() {
    let mut component = Component::new(test_encoding());
    assert!(component.subcomponents().is_empty());

    component.set_value("A&B");
    assert_eq!(component.subcomponents().len(), 2);

    component.set_value("");
    assert!(component.subcomponents().is_empty());
}

#[test]
fn test_add_subcomponent() {
    let mut component = component("A");
    component
        .add_subcomponent(SubComponent::new("B", test_encoding()))
        .unwrap();

    assert_eq!(component.subcomponent(2).unwrap().value(), "B");
}

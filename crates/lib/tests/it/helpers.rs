use std::sync::Arc;

use hl7tree::{Component, Encoding, Field};

// ==========================
// CORE TEST FACTORIES
// ==========================

/// Standard `|^~\&` delimiter set behind a shared pointer
pub fn test_encoding() -> Arc<Encoding> {
    Encoding::shared()
}

/// Creates a field with the standard delimiters
pub fn field(value: &str) -> Field {
    Field::with_value(value, test_encoding())
}

/// Creates a component with the standard delimiters
pub fn component(value: &str) -> Component {
    Component::with_value(value, test_encoding())
}

// ==========================
// ASSERTION HELPERS
// ==========================

/// Collects the raw values of a field's components
pub fn component_values(field: &Field) -> Vec<String> {
    field
        .components()
        .iter()
        .map(|c| c.value().to_string())
        .collect()
}

/// Collects the component values of each repetition of a field
pub fn repetition_values(field: &Field) -> Vec<Vec<String>> {
    field
        .repetitions()
        .expect("field should have repetitions")
        .iter()
        .map(component_values)
        .collect()
}

/// Asserts that a field is flat with exactly the given components
pub fn assert_components(field: &Field, expected: &[&str]) {
    assert!(
        !field.has_repetitions(),
        "Expected flat field, got repetitions for {:?}",
        field.value()
    );
    assert_eq!(component_values(field), expected, "Component mismatch");
}

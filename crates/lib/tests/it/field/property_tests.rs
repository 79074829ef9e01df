//! Property-based tests for field decomposition.
//!
//! Values are drawn from a small alphabet that mixes plain characters with
//! the standard delimiters so every branch of the decomposition is reached.

use hl7tree::Field;
use proptest::prelude::*;

use crate::helpers::*;

// ─────────────────────────────────────────────────────────────────────────────
// Proptest Strategies
// ─────────────────────────────────────────────────────────────────────────────

/// Text without any repetition or component delimiter.
fn plain_text() -> impl Strategy<Value = String> {
    "[A-Z0-9 &]{1,12}"
}

/// Text that may contain component delimiters but no repetition delimiter.
fn component_text() -> impl Strategy<Value = String> {
    "[A-Z&^]{0,24}"
}

/// Arbitrary text over the full delimiter set.
fn any_text() -> impl Strategy<Value = String> {
    "[A-Z^~&\\\\]{0,32}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// A value with no repetition or component delimiter is a single component.
    #[test]
    fn prop_plain_value_single_component(value in plain_text()) {
        let field = field(&value);

        prop_assert!(!field.has_repetitions());
        prop_assert!(!field.is_componentized());
        prop_assert_eq!(field.component_count(), 1);
        prop_assert_eq!(field.component(1).unwrap().value(), value.as_str());
    }

    /// k component delimiters give k + 1 components in order.
    #[test]
    fn prop_component_count(value in component_text()) {
        prop_assume!(!value.is_empty());
        let field = field(&value);
        let k = value.matches('^').count();

        prop_assert!(!field.has_repetitions());
        prop_assert_eq!(field.component_count(), k + 1);
        prop_assert_eq!(field.is_componentized(), k >= 1);
        prop_assert_eq!(component_values(&field).join("^"), value);
    }

    /// m repetition delimiters give m + 1 repetitions, each split on components.
    #[test]
    fn prop_repetition_count(value in any_text()) {
        let m = value.matches('~').count();
        prop_assume!(m >= 1);
        let field = field(&value);

        prop_assert!(field.has_repetitions());
        prop_assert!(field.components().is_empty());
        prop_assert_eq!(field.repetition_count(), m + 1);

        let reps = field.repetitions().unwrap();
        for (rep, piece) in reps.iter().zip(value.split('~')) {
            prop_assert_eq!(rep.value(), piece);
            prop_assert!(!rep.has_repetitions());
            if piece.is_empty() {
                prop_assert_eq!(rep.component_count(), 0);
            } else {
                prop_assert_eq!(rep.component_count(), piece.matches('^').count() + 1);
            }
        }
    }

    /// A delimiter declaration keeps any value verbatim.
    #[test]
    fn prop_declaration_is_verbatim(value in any_text()) {
        let field = Field::delimiter_declaration(value.clone(), test_encoding());

        prop_assert!(!field.has_repetitions());
        prop_assert_eq!(field.component_count(), 1);
        let component = field.component(1).unwrap();
        prop_assert_eq!(component.subcomponents().len(), 1);
        prop_assert_eq!(component.subcomponent(1).unwrap().value(), value.as_str());
    }

    /// 1-based lookup agrees with the component slice and fails outside it.
    #[test]
    fn prop_component_lookup(value in component_text(), position in 0usize..30) {
        let field = field(&value);
        let all = field.components();

        if (1..=all.len()).contains(&position) {
            prop_assert_eq!(field.component(position).unwrap(), &all[position - 1]);
        } else {
            prop_assert!(field.component(position).unwrap_err().is_not_found());
        }
    }

    /// Positional insert past the end lands at the index and pads with empties.
    #[test]
    fn prop_insert_past_end(value in component_text(), extra in 0usize..20) {
        let mut field = field(&value);
        let before = field.component_count();
        let index = before + extra;

        field.add_component_at(component("NEW"), index).unwrap();

        prop_assert_eq!(field.component_count(), index + 1);
        prop_assert_eq!(field.components()[index].value(), "NEW");
        for placeholder in &field.components()[before..index] {
            prop_assert_eq!(placeholder.value(), "");
        }
    }
}

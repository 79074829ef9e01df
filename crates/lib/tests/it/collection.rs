//! ElementList integration tests
//!
//! Covers absent-on-miss reads, direct replacement, gap-filling positional
//! insertion and the element limit, using fields and components as elements.

use std::sync::Arc;

use hl7tree::{
    CollectionError, Component, Element, ElementList, Encoding, Field, constants::MAX_ELEMENTS,
};

use crate::helpers::*;

#[test]
fn test_list_basic_operations() {
    let mut list = ElementList::new();
    assert!(list.is_empty());

    let idx1 = list.push(field("PID")).unwrap();
    let idx2 = list.push(field("1")).unwrap();

    assert_eq!(idx1, 0);
    assert_eq!(idx2, 1);
    assert_eq!(list.len(), 2);
    assert_eq!(list.get(1).map(|f| f.value()), Some("1"));
    assert!(list.get(2).is_none());
}

#[test]
fn test_insert_at_round_trip() {
    let mut list: ElementList<Field> = ["A", "B", "C"].into_iter().map(field).collect();

    list.insert_at(field("H"), 8).unwrap();

    assert_eq!(list.get(8).map(|f| f.value()), Some("H"));
    for index in 3..8 {
        let placeholder = list.get(index).expect("placeholder should be present");
        assert_eq!(placeholder.value(), "");
        assert!(placeholder.components().is_empty());
    }
    assert!(list.get(9).is_none());
}

#[test]
fn test_placeholders_share_caller_encoding() {
    let encoding = Arc::new(Encoding::from_declaration('|', "#*!@").unwrap());
    let mut list = ElementList::new();

    list.insert_at(Component::with_value("X", encoding.clone()), 2)
        .unwrap();

    for element in &list {
        assert!(Arc::ptr_eq(Element::encoding(element), &encoding));
    }
}

#[test]
fn test_insert_in_bounds_never_shifts() {
    let mut list: ElementList<Component> = ["A", "B", "C"].into_iter().map(component).collect();

    let old = list.insert_at(component("Q"), 0).unwrap();

    assert_eq!(old.map(|c| c.value().to_string()), Some("A".to_string()));
    let values: Vec<_> = list.iter().map(|c| c.value()).collect();
    assert_eq!(values, vec!["Q", "B", "C"]);
}

#[test]
fn test_set_past_end_is_rejected() {
    let mut list: ElementList<Component> = ElementList::new();
    let err = list.set(0, component("A")).unwrap_err();

    assert_eq!(err, CollectionError::IndexOutOfBounds { index: 0, len: 0 });
    assert!(list.is_empty());
}

#[test]
fn test_grow_to_is_named_primitive() {
    let encoding = test_encoding();
    let mut list: ElementList<Field> = ElementList::new();

    assert_eq!(list.grow_to(3, &encoding).unwrap(), 3);
    assert_eq!(list.grow_to(3, &encoding).unwrap(), 0);
    assert!(list.iter().all(|f| f.value().is_empty()));
}

#[test]
fn test_position_limit() {
    let mut list: ElementList<Field> = ElementList::new();

    let err = list.insert_at(field("X"), MAX_ELEMENTS + 10).unwrap_err();
    assert_eq!(
        err,
        CollectionError::PositionTooLarge {
            index: MAX_ELEMENTS + 10,
            max: MAX_ELEMENTS
        }
    );
    assert!(list.is_empty());
}

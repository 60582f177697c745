//! Integration tests for descendant printing

use kindred_foundation::{Person, PersonHandle, PersonId};
use kindred_registry::Registry;

#[test]
fn childless_person_prints_one_line() {
    let mut registry = Registry::new();
    registry.add(&Person::man(2, "Watson Paul"), None, None);
    let paul = registry.find_by_id(PersonId::new(2)).unwrap();

    assert_eq!(
        registry.descendants_to_string(paul).unwrap(),
        "2: Watson Paul (man)\n"
    );
}

#[test]
fn print_into_existing_buffer_appends() {
    let mut registry = Registry::new();
    registry.add(&Person::man(2, "Watson Paul"), None, None);
    let paul = registry.find_by_id(PersonId::new(2)).unwrap();

    let mut out = String::from("header\n");
    registry.print_descendants(paul, &mut out).unwrap();

    assert_eq!(out, "header\n2: Watson Paul (man)\n");
}

#[test]
fn renamed_child_prints_history() {
    let mut registry = Registry::new();
    registry.add(&Person::man(1, "Peterson George"), None, None);
    let george = registry.find_by_id(PersonId::new(1));
    registry.add(&Person::woman(12, "Peterson Sue"), george, None);
    let sue = registry.find_by_id(PersonId::new(12)).unwrap();
    registry.rename(sue, "Smith Sue").unwrap();

    assert_eq!(
        registry.descendants_to_string(george.unwrap()).unwrap(),
        "1: Peterson George (man)\n \\- 12: Smith Sue [Peterson Sue] (woman)\n"
    );
}

#[test]
fn foreign_handle_is_rejected() {
    let registry = Registry::new();
    assert!(registry.descendants_to_string(PersonHandle::new(0)).is_err());
}

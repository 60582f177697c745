//! Reference family integration tests
//!
//! Three generations with a remarried woman, shared grandchildren, and an
//! unrelated bystander.

use kindred_foundation::{Person, PersonHandle, PersonId, Relation};
use kindred_registry::Registry;

fn id(raw: i64) -> PersonId {
    PersonId::new(raw)
}

fn lines(registry: &Registry, handles: &[PersonHandle]) -> Vec<String> {
    handles
        .iter()
        .map(|h| registry.get(*h).unwrap().to_string())
        .collect()
}

fn steps(registry: &Registry, path: &[(PersonHandle, Relation)]) -> Vec<(String, Relation)> {
    path.iter()
        .map(|(h, rel)| (registry.get(*h).unwrap().to_string(), *rel))
        .collect()
}

fn rename(registry: &mut Registry, raw: i64, name: &str) {
    let handle = registry.find_by_id(id(raw)).unwrap();
    registry.rename(handle, name).unwrap();
}

fn add(registry: &mut Registry, person: Person, father: i64, mother: i64) -> bool {
    let father = registry.find_by_id(id(father));
    let mother = registry.find_by_id(id(mother));
    registry.add(&person, father, mother)
}

/// Builds the reference family. Parent id 0 means "no parent".
fn build() -> Registry {
    let mut r = Registry::new();
    assert!(add(&mut r, Person::man(1, "Peterson George"), 0, 0));
    assert!(add(&mut r, Person::man(2, "Watson Paul"), 0, 0));
    assert!(add(&mut r, Person::man(10, "Smith Samuel"), 0, 0));
    assert!(add(&mut r, Person::woman(11, "Peterson Jane"), 1, 0));
    assert!(add(&mut r, Person::woman(12, "Peterson Sue"), 1, 0));
    assert!(add(&mut r, Person::man(13, "Pershing John"), 0, 0));
    assert!(add(&mut r, Person::man(14, "Pearce Joe"), 0, 0));
    assert!(add(&mut r, Person::man(15, "Peant Thomas"), 0, 0));
    assert!(add(&mut r, Person::man(100, "Smith John"), 10, 11));
    assert!(add(&mut r, Person::man(101, "Smith Roger"), 10, 11));
    assert!(add(&mut r, Person::man(102, "Smith Daniel"), 10, 11));
    assert!(add(&mut r, Person::woman(103, "Smith Eve"), 10, 11));
    assert!(!add(&mut r, Person::woman(103, "Smith Jane"), 10, 11));
    rename(&mut r, 12, "Smith Sue");
    assert!(add(&mut r, Person::man(150, "Pershing Joe"), 13, 12));
    rename(&mut r, 12, "Pearce Sue");
    assert!(add(&mut r, Person::man(151, "Pearce Phillip"), 14, 12));
    rename(&mut r, 12, "Peant Sue");
    assert!(add(&mut r, Person::man(152, "Peant Harry"), 15, 12));
    assert!(add(&mut r, Person::man(200, "Pershing Peter"), 150, 103));
    assert!(add(&mut r, Person::woman(201, "Pershing Julia"), 150, 103));
    assert!(add(&mut r, Person::woman(202, "Pershing Anne"), 150, 103));
    r
}

// =============================================================================
// Name search
// =============================================================================

#[test]
fn search_peterson() {
    let r = build();
    assert_eq!(
        lines(&r, &r.find_by_name("Peterson")),
        vec![
            "1: Peterson George (man)",
            "11: Peterson Jane (woman)",
            "12: Peant Sue [Peterson Sue, Smith Sue, Pearce Sue] (woman)",
        ]
    );
}

#[test]
fn search_pe() {
    let r = build();
    assert_eq!(
        lines(&r, &r.find_by_name("Pe")),
        vec![
            "1: Peterson George (man)",
            "11: Peterson Jane (woman)",
            "12: Peant Sue [Peterson Sue, Smith Sue, Pearce Sue] (woman)",
            "13: Pershing John (man)",
            "14: Pearce Joe (man)",
            "15: Peant Thomas (man)",
            "150: Pershing Joe (man)",
            "151: Pearce Phillip (man)",
            "152: Peant Harry (man)",
            "200: Pershing Peter (man)",
            "201: Pershing Julia (woman)",
            "202: Pershing Anne (woman)",
        ]
    );
}

#[test]
fn search_smith() {
    let r = build();
    assert_eq!(
        lines(&r, &r.find_by_name("Smith")),
        vec![
            "10: Smith Samuel (man)",
            "12: Peant Sue [Peterson Sue, Smith Sue, Pearce Sue] (woman)",
            "100: Smith John (man)",
            "101: Smith Roger (man)",
            "102: Smith Daniel (man)",
            "103: Smith Eve (woman)",
        ]
    );
}

// =============================================================================
// Lookup and printing
// =============================================================================

#[test]
fn lookup_by_id() {
    let r = build();
    assert_eq!(r.person(id(1)).unwrap().to_string(), "1: Peterson George (man)");
    assert_eq!(r.person(id(2)).unwrap().to_string(), "2: Watson Paul (man)");
    assert_eq!(r.person(id(103)).unwrap().name(), "Smith Eve");
}

#[test]
fn descendants_of_root() {
    let r = build();
    let george = r.find_by_id(id(1)).unwrap();

    let expected = concat!(
        "1: Peterson George (man)\n",
        " +- 11: Peterson Jane (woman)\n",
        " |  +- 100: Smith John (man)\n",
        " |  +- 101: Smith Roger (man)\n",
        " |  +- 102: Smith Daniel (man)\n",
        " |  \\- 103: Smith Eve (woman)\n",
        " |     +- 200: Pershing Peter (man)\n",
        " |     +- 201: Pershing Julia (woman)\n",
        " |     \\- 202: Pershing Anne (woman)\n",
        " \\- 12: Peant Sue [Peterson Sue, Smith Sue, Pearce Sue] (woman)\n",
        "    +- 150: Pershing Joe (man)\n",
        "    |  +- 200: Pershing Peter (man)\n",
        "    |  +- 201: Pershing Julia (woman)\n",
        "    |  \\- 202: Pershing Anne (woman)\n",
        "    +- 151: Pearce Phillip (man)\n",
        "    \\- 152: Peant Harry (man)\n",
    );
    assert_eq!(r.descendants_to_string(george).unwrap(), expected);
}

#[test]
fn descendants_of_leaves() {
    let r = build();
    let john = r.find_by_id(id(100)).unwrap();
    let paul = r.find_by_id(id(2)).unwrap();

    assert_eq!(r.descendants_to_string(john).unwrap(), "100: Smith John (man)\n");
    assert_eq!(r.descendants_to_string(paul).unwrap(), "2: Watson Paul (man)\n");
}

// =============================================================================
// Relationship search
// =============================================================================

#[test]
fn relatives_grandfather() {
    let r = build();
    assert_eq!(
        steps(&r, &r.find_relatives(id(100), id(1)).unwrap()),
        vec![
            ("11: Peterson Jane (woman)".to_string(), Relation::Mother),
            ("1: Peterson George (man)".to_string(), Relation::Father),
        ]
    );
}

#[test]
fn relatives_tie_break_prefers_earlier_expansion() {
    // Two five-step paths exist: through Eve's children to Pershing Joe, or
    // through George and Sue to Pershing Joe. Eve's son is reached first.
    let r = build();
    assert_eq!(
        steps(&r, &r.find_relatives(id(100), id(13)).unwrap()),
        vec![
            ("10: Smith Samuel (man)".to_string(), Relation::Father),
            ("103: Smith Eve (woman)".to_string(), Relation::Daughter),
            ("200: Pershing Peter (man)".to_string(), Relation::Son),
            ("150: Pershing Joe (man)".to_string(), Relation::Father),
            ("13: Pershing John (man)".to_string(), Relation::Father),
        ]
    );
}

#[test]
fn relatives_unrelated() {
    let r = build();
    assert!(r.find_relatives(id(100), id(2)).unwrap().is_empty());
}

#[test]
fn relatives_invalid() {
    let r = build();
    assert!(r.find_relatives(id(100), id(3)).unwrap_err().is_invalid_query());
    assert!(r.find_relatives(id(100), id(100)).unwrap_err().is_invalid_query());
}

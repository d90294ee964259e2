//! Contract behavior of the two name strategies
//!
//! Preconditions, postconditions, and invariants observable through the
//! public operation set, exercised on both storage strategies.

use nomen_core::{ArrayName, ContractViolation, StringName};
use pretty_assertions::assert_eq;

fn parts(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn array_name_reads_components() {
    let n = ArrayName::from_components(parts(&["a", "b", "c"]), '.').unwrap();

    assert!(!n.is_empty());
    assert_eq!(n.count(), 3);
    assert_eq!(n.component(0).unwrap(), "a");
    assert_eq!(n.component(1).unwrap(), "b");
    assert_eq!(n.component(2).unwrap(), "c");
}

#[test]
fn array_name_supports_empty() {
    let n = ArrayName::from_components(Vec::new(), '.').unwrap();

    assert!(n.is_empty());
    assert_eq!(n.count(), 0);
    assert_eq!(n.as_string().unwrap(), "");
    assert_eq!(n.as_data_string().unwrap(), "");
}

#[test]
fn constructors_enforce_delimiter_precondition() {
    // The escape character is never a valid delimiter.
    assert!(matches!(
        ArrayName::from_components(parts(&["a"]), '\\'),
        Err(ContractViolation::Precondition { .. })
    ));
    assert!(matches!(
        StringName::from_delimited("a", '\\'),
        Err(ContractViolation::Precondition { .. })
    ));

    // Multi-character input only reaches a name through Delimiter parsing.
    let two_chars: Result<nomen_core::Delimiter, _> = "..".parse();
    assert!(matches!(
        two_chars,
        Err(ContractViolation::Precondition { .. })
    ));
}

#[test]
fn component_enforces_index_precondition() {
    let n = ArrayName::from_components(parts(&["x", "y"]), '.').unwrap();

    assert!(matches!(
        n.component(2),
        Err(ContractViolation::Precondition { .. })
    ));
    assert!(matches!(
        n.component(usize::MAX),
        Err(ContractViolation::Precondition { .. })
    ));
}

#[test]
fn insert_and_remove_keep_count_consistent() {
    let mut n = ArrayName::from_components(parts(&["a", "c"]), '.').unwrap();

    n.insert(1, "b").unwrap();
    assert_eq!(n.count(), 3);
    assert_eq!(n.component(0).unwrap(), "a");
    assert_eq!(n.component(1).unwrap(), "b");
    assert_eq!(n.component(2).unwrap(), "c");

    n.remove(1).unwrap();
    assert_eq!(n.count(), 2);
    assert_eq!(n.component(0).unwrap(), "a");
    assert_eq!(n.component(1).unwrap(), "c");
}

#[test]
fn insert_enforces_index_precondition() {
    let mut n = ArrayName::from_components(parts(&["a", "b"]), '.').unwrap();

    // index == count appends, index > count is rejected
    assert!(n.insert(2, "c").is_ok());
    assert!(matches!(
        n.insert(4, "x"),
        Err(ContractViolation::Precondition { .. })
    ));
}

#[test]
fn clone_creates_equal_but_independent_array_name() {
    let original = ArrayName::from_components(parts(&["a", "b"]), '.').unwrap();
    let mut copy = original.clone();

    assert!(original.is_equal(&copy));

    copy.set_component(0, "x").unwrap();
    assert_eq!(original.component(0).unwrap(), "a");
    assert_eq!(copy.component(0).unwrap(), "x");
}

#[test]
fn concat_appends_all_components() {
    let mut left = ArrayName::from_components(parts(&["a"]), '.').unwrap();
    let right = ArrayName::from_components(parts(&["b", "c"]), '.').unwrap();

    left.concat(&right).unwrap();

    assert_eq!(left.count(), 3);
    assert_eq!(left.component(0).unwrap(), "a");
    assert_eq!(left.component(1).unwrap(), "b");
    assert_eq!(left.component(2).unwrap(), "c");
    // other is untouched
    assert_eq!(right.count(), 2);
}

#[test]
fn equal_array_names_have_same_hash_code() {
    let n1 = ArrayName::from_components(parts(&["a", "b", "c"]), '.').unwrap();
    let n2 = ArrayName::from_components(parts(&["a", "b", "c"]), '.').unwrap();

    assert!(n1.is_equal(&n2));
    assert_eq!(n1.hash_code().unwrap(), n2.hash_code().unwrap());
}

#[test]
fn string_name_reads_components() {
    let n = StringName::from_delimited("a.b.c", '.').unwrap();

    assert!(!n.is_empty());
    assert_eq!(n.count(), 3);
    assert_eq!(n.component(0).unwrap(), "a");
    assert_eq!(n.component(1).unwrap(), "b");
    assert_eq!(n.component(2).unwrap(), "c");
}

#[test]
fn string_name_supports_empty() {
    let n = StringName::from_delimited("", '.').unwrap();

    assert!(n.is_empty());
    assert_eq!(n.count(), 0);
    assert_eq!(n.as_string().unwrap(), "");
    assert_eq!(n.as_data_string().unwrap(), "");
}

#[test]
fn string_name_component_enforces_index_precondition() {
    let n = StringName::from_delimited("x.y", '.').unwrap();

    assert!(matches!(
        n.component(2),
        Err(ContractViolation::Precondition { .. })
    ));
}

#[test]
fn string_name_append_and_remove_keep_count_consistent() {
    let mut n = StringName::from_delimited("a.b", '.').unwrap();

    n.append("c").unwrap();
    assert_eq!(n.count(), 3);
    assert_eq!(n.component(2).unwrap(), "c");

    n.remove(1).unwrap();
    assert_eq!(n.count(), 2);
    assert_eq!(n.component(0).unwrap(), "a");
    assert_eq!(n.component(1).unwrap(), "c");
}

#[test]
fn clone_creates_equal_but_independent_string_name() {
    let original = StringName::from_delimited("a.b", '.').unwrap();
    let mut copy = original.clone();

    assert!(original.is_equal(&copy));

    copy.set_component(0, "x").unwrap();
    assert_eq!(original.component(0).unwrap(), "a");
    assert_eq!(copy.component(0).unwrap(), "x");
}

#[test]
fn equal_string_names_have_same_hash_code() {
    let n1 = StringName::from_delimited("a.b.c", '.').unwrap();
    let n2 = StringName::from_delimited("a.b.c", '.').unwrap();

    assert!(n1.is_equal(&n2));
    assert_eq!(n1.hash_code().unwrap(), n2.hash_code().unwrap());
}

#[test]
fn strategies_with_same_logical_content_are_equal() {
    let array = ArrayName::from_components(parts(&["oss", "cs", "fau", "de"]), '.').unwrap();
    let string = StringName::from_delimited("oss.cs.fau.de", '.').unwrap();

    assert!(array.is_equal(&string));
    assert!(string.is_equal(&array));
    assert_eq!(
        array.as_data_string().unwrap(),
        string.as_data_string().unwrap()
    );
}

#[test]
fn equality_is_reflexive_symmetric_transitive() {
    let a = ArrayName::from_components(parts(&["x", "y"]), '.').unwrap();
    let b = StringName::from_delimited("x.y", '.').unwrap();
    let c = ArrayName::from_components(parts(&["x", "y"]), '.').unwrap();

    assert!(a.is_equal(&a));

    assert!(a.is_equal(&b));
    assert!(b.is_equal(&a));

    assert!(b.is_equal(&c));
    assert!(a.is_equal(&c));
}

#[test]
fn as_string_with_requested_delimiter() {
    let n = ArrayName::from_components(parts(&["a", "b"]), '.').unwrap();
    assert_eq!(n.as_string_with('#').unwrap(), "a#b");
    // the stored delimiter is unchanged
    assert_eq!(n.delimiter(), '.');
}

#[test]
fn masked_component_counts_as_one() {
    // "Oh\.\.\." is one component under the '.' delimiter
    let n = StringName::from_delimited("Oh\\.\\.\\.", '.').unwrap();
    assert_eq!(n.count(), 1);
    assert_eq!(n.as_string().unwrap(), "Oh...");
}

#[test]
fn slashes_make_empty_components() {
    // "///" is four empty components under the '/' delimiter
    let n = StringName::from_delimited("///", '/').unwrap();
    assert_eq!(n.count(), 4);
    for i in 0..4 {
        assert_eq!(n.component(i).unwrap(), "");
    }
}

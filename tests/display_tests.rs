//! Integration tests for Display trait implementations.
//!
//! Values render in a JSON-like form, paths in their bracketed string form
//! and errors as `Combinator: message`.

use pointfree::{numbers, Error, Value};

// =============================================================================
// Value Display Tests
// =============================================================================

#[test]
fn test_primitive_display() {
    assert_eq!(format!("{}", Value::Absent), "undefined");
    assert_eq!(format!("{}", Value::Null), "null");
    assert_eq!(format!("{}", Value::from(true)), "true");
    assert_eq!(format!("{}", Value::from(1.5)), "1.5");
    assert_eq!(format!("{}", Value::from("hi")), "\"hi\"");
}

#[test]
fn test_container_display() {
    let value = Value::record([
        ("tags", Value::sequence(["a", "b"])),
        ("empty", Value::empty_record()),
    ]);
    assert_eq!(format!("{value}"), r#"{"tags": ["a", "b"], "empty": {}}"#);
}

#[test]
fn test_union_display() {
    let union = Value::union([Value::from("a"), Value::from(1), Value::Absent]);
    assert_eq!(format!("{union}"), r#""a" | 1 | undefined"#);
}

#[test]
fn test_function_display() {
    assert_eq!(format!("{}", Value::from(numbers::add())), "<fn Add>");
}

// =============================================================================
// Error Display Tests
// =============================================================================

#[test]
fn test_type_mismatch_display() {
    let error = Error::TypeMismatch {
        combinator: "Map",
        expected: "a sequence",
        found: "number",
    };
    assert_eq!(error.to_string(), "Map: expected a sequence, found number");
}

#[test]
fn test_invalid_key_display() {
    let error = Error::InvalidKey {
        combinator: "MapKeysDeep",
        path: "a[0].b".to_string(),
        found: "null",
    };
    assert_eq!(
        error.to_string(),
        "MapKeysDeep: cannot use null as a record key at `a[0].b`"
    );
}

// =============================================================================
// Path Display Tests
// =============================================================================

#[cfg(feature = "objects")]
#[test]
fn test_path_display_round_trips() {
    use pointfree::objects::Path;

    for text in ["a", "a.b", "a[0]", "a.b[2].c", "[1][2]"] {
        assert_eq!(Path::parse(text).to_string(), text);
    }
}

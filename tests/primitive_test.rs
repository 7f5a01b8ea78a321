//! Tests for scalar validators and their error messages.

use serde_json::{json, Value};
use stillwater::Validation;
use typebind::{
    validate_bool, validate_enumeration_member, validate_float, validate_int, validate_literal,
    validate_string, validate_unknown, validate_utf8, Enumeration, ErrorReason, ValidationResult,
};

fn unwrap_failure<T: std::fmt::Debug>(result: ValidationResult<T>) -> ErrorReason {
    match result {
        Validation::Failure(reason) => reason,
        Validation::Success(value) => panic!("expected failure, got success: {:?}", value),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Color {
    Red,
    Green,
    Blue,
}

impl Enumeration for Color {
    const NAME: &'static str = "Color";

    fn members() -> &'static [Self] {
        &[Color::Red, Color::Green, Color::Blue]
    }

    fn to_value(&self) -> Value {
        match self {
            Color::Red => json!("red"),
            Color::Green => json!("green"),
            Color::Blue => json!("blue"),
        }
    }
}

#[test]
fn test_string_accepts_text() {
    assert_eq!(
        validate_string(&json!("hullaballoo")),
        Validation::Success("hullaballoo".to_string())
    );
    assert_eq!(validate_string(&json!("")), Validation::Success(String::new()));
}

#[test]
fn test_string_rejects_other_kinds() {
    let cases = [
        (json!(1), "Value is not string: 1 (integer)"),
        (json!(1.5), "Value is not string: 1.5 (float)"),
        (json!(null), "Value is not string: null (null)"),
        (json!(["a"]), "Value is not string: [\"a\"] (array)"),
        (json!({"a": 1}), "Value is not string: {\"a\":1} (object)"),
    ];

    for (value, message) in cases {
        assert_eq!(unwrap_failure(validate_string(&value)), ErrorReason::message(message));
    }
}

#[test]
fn test_utf8_bytes() {
    assert_eq!(validate_utf8(b"plain"), Validation::Success("plain".to_string()));
    assert_eq!(
        unwrap_failure(validate_utf8(&[0xc3, 0x28])),
        ErrorReason::message("Bytes invalid as utf-8 string")
    );
}

#[test]
fn test_int_excludes_booleans() {
    assert_eq!(validate_int(&json!(1)), Validation::Success(1));
    assert_eq!(
        unwrap_failure(validate_int(&json!(true))),
        ErrorReason::message("Value is not int: true (boolean)")
    );
    assert_eq!(
        unwrap_failure(validate_int(&json!(false))),
        ErrorReason::message("Value is not int: false (boolean)")
    );
}

#[test]
fn test_int_rejects_floats() {
    assert_eq!(
        unwrap_failure(validate_int(&json!(2.0))),
        ErrorReason::message("Value is not int: 2.0 (float)")
    );
}

#[test]
fn test_float_does_not_coerce_integers() {
    assert_eq!(validate_float(&json!(0.25)), Validation::Success(0.25));
    assert!(validate_float(&json!(3)).is_failure());
    assert!(validate_float(&json!("3.0")).is_failure());
}

#[test]
fn test_bool() {
    assert_eq!(validate_bool(&json!(true)), Validation::Success(true));
    assert_eq!(
        unwrap_failure(validate_bool(&json!(0))),
        ErrorReason::message("Value is not bool: 0 (integer)")
    );
}

#[test]
fn test_literal_string() {
    let kind = validate_literal("SomeType");
    assert_eq!(kind(&json!("SomeType")), Validation::Success("SomeType"));
    assert_eq!(
        unwrap_failure(kind(&json!("OtherType"))),
        ErrorReason::message("Expected \"SomeType\", got: \"OtherType\" (string)")
    );
}

#[test]
fn test_literal_bool_does_not_match_int() {
    let validator = validate_literal(true);
    assert!(validator(&json!(true)).is_success());
    assert!(validator(&json!(1)).is_failure());
}

#[test]
fn test_enumeration_member() {
    assert_eq!(
        validate_enumeration_member::<Color>(&json!("blue")),
        Validation::Success(Color::Blue)
    );
    assert_eq!(
        unwrap_failure(validate_enumeration_member::<Color>(&json!("purple"))),
        ErrorReason::message("Value cannot be found in Color: \"purple\" (string)")
    );
    assert!(validate_enumeration_member::<Color>(&json!(0)).is_failure());
}

#[test]
fn test_unknown_is_identity() {
    let values = [json!(null), json!(1), json!({"nested": [true]})];
    for value in values {
        assert_eq!(validate_unknown(&value), Validation::Success(value.clone()));
    }
}

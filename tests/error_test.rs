//! Tests for error reasons, paths and binding errors through the public API.

use serde_json::json;
use typebind::{
    validate_int, validate_interface, validate_string, validate_string_map_of, EncodeError,
    ErrorPath, ErrorReason, FieldAccessError, InterfaceSpecification,
};

#[test]
fn test_path_navigation() {
    let path = ErrorPath::from_field("data").push_field("id");

    assert_eq!(path.len(), 2);
    assert_eq!(path.last(), Some("id"));
    assert_eq!(path.segments().collect::<Vec<_>>(), vec!["data", "id"]);
    assert_eq!(path.parent(), Some(ErrorPath::from_field("data")));
    assert_eq!(ErrorPath::from_field("data").parent(), Some(ErrorPath::root()));
    assert_eq!(ErrorPath::root().parent(), None);
    assert_eq!(ErrorPath::root().to_string(), "(root)");
}

#[test]
fn test_flattened_report_of_nested_failures() {
    let spec = InterfaceSpecification::new()
        .field("name", validate_string)
        .field("scores", validate_string_map_of(validate_int));

    let reason = validate_interface(&json!({"scores": {"math": 90, "art": "A"}}), &spec)
        .into_result()
        .unwrap_err();

    let report: Vec<String> = reason
        .leaves()
        .into_iter()
        .map(|(path, message)| format!("{}: {}", path, message))
        .collect();

    assert_eq!(
        report,
        vec![
            "name: Missing key: name".to_string(),
            "scores.art: Value is not int: \"A\" (string)".to_string(),
        ]
    );
}

#[test]
fn test_reason_is_a_std_error() {
    fn as_error(reason: ErrorReason) -> Box<dyn std::error::Error + Send + Sync> {
        Box::new(reason)
    }

    let err = as_error(ErrorReason::fields([("a", ErrorReason::message("bad"))]));
    assert_eq!(err.to_string(), "{a: bad}");
}

#[test]
fn test_binding_error_messages() {
    let mismatch = FieldAccessError::TypeMismatch {
        field: "id".to_string(),
        expected: "alloc::string::String",
    };
    assert_eq!(
        mismatch.to_string(),
        "field 'id' does not hold a value of type alloc::string::String"
    );
    assert_eq!(
        EncodeError::Unsupported { kind: "array" }.to_string(),
        "Unsupported type: array"
    );
}

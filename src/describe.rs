//! Rendering of untyped values inside error messages.

use serde_json::Value;

/// Returns the kind name used in error messages for a value.
///
/// Numbers are split into `integer` and `float` following how they were
/// written in the input.
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Renders a value as `<compact json> (<kind>)`.
pub fn describe(value: &Value) -> String {
    format!("{} ({})", value, kind_name(value))
}

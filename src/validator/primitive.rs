//! Validators for scalar values.
//!
//! Each validator inspects the variant of the untyped [`Value`] and either
//! returns the typed value or a message of the form
//! `Value is not <kind>: <json> (<json kind>)`.

use serde_json::Value;
use stillwater::Validation;

use crate::describe::describe;
use crate::error::ErrorReason;
use crate::ValidationResult;

fn not_a<T>(kind: &str, value: &Value) -> ValidationResult<T> {
    Validation::Failure(ErrorReason::Message(format!(
        "Value is not {}: {}",
        kind,
        describe(value)
    )))
}

/// Validates a value as a string.
///
/// # Example
///
/// ```rust
/// use typebind::validate_string;
/// use serde_json::json;
///
/// assert!(validate_string(&json!("hullaballoo")).is_success());
/// assert!(validate_string(&json!(1)).is_failure());
/// ```
pub fn validate_string(value: &Value) -> ValidationResult<String> {
    match value {
        Value::String(text) => Validation::Success(text.clone()),
        other => not_a("string", other),
    }
}

/// Validates a raw byte payload as UTF-8 text.
///
/// This is the byte-sequence half of string validation; [`Value`] itself has
/// no byte variant.
pub fn validate_utf8(bytes: &[u8]) -> ValidationResult<String> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Validation::Success(text.to_string()),
        Err(_) => Validation::Failure(ErrorReason::message("Bytes invalid as utf-8 string")),
    }
}

/// Validates a value as a signed 64-bit integer.
///
/// Booleans are rejected, as are floats (even integral ones like `1.0`) and
/// integers outside the `i64` range.
pub fn validate_int(value: &Value) -> ValidationResult<i64> {
    match value {
        Value::Number(n) => match n.as_i64() {
            Some(int) => Validation::Success(int),
            None => not_a("int", value),
        },
        other => not_a("int", other),
    }
}

/// Validates a value as a float. Integers are not coerced.
pub fn validate_float(value: &Value) -> ValidationResult<f64> {
    match value.as_f64() {
        Some(float) if value.is_f64() => Validation::Success(float),
        _ => not_a("float", value),
    }
}

/// Validates a value as a boolean.
pub fn validate_bool(value: &Value) -> ValidationResult<bool> {
    match value {
        Value::Bool(b) => Validation::Success(*b),
        other => not_a("bool", other),
    }
}

/// Accepts any value, returning it unchanged.
pub fn validate_unknown(value: &Value) -> ValidationResult<Value> {
    Validation::Success(value.clone())
}

/// Returns a validator accepting only values equal to `expected`.
///
/// Used for discriminant fields with a single fixed value.
///
/// # Example
///
/// ```rust
/// use typebind::validate_literal;
/// use serde_json::json;
///
/// let kind = validate_literal("SomeType");
/// assert!(kind(&json!("SomeType")).is_success());
/// assert!(kind(&json!("OtherType")).is_failure());
/// ```
pub fn validate_literal<L>(expected: L) -> impl Fn(&Value) -> ValidationResult<L> + Send + Sync
where
    L: Clone + Into<Value> + Send + Sync,
    Value: PartialEq<L>,
{
    move |value: &Value| {
        if *value == expected {
            Validation::Success(expected.clone())
        } else {
            let expected: Value = expected.clone().into();
            Validation::Failure(ErrorReason::Message(format!(
                "Expected {}, got: {}",
                expected,
                describe(value)
            )))
        }
    }
}

/// A closed enumeration whose members are identified by a JSON value.
///
/// # Example
///
/// ```rust
/// use typebind::{validate_enumeration_member, Enumeration};
/// use serde_json::{json, Value};
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum Color { Red, Green }
///
/// impl Enumeration for Color {
///     const NAME: &'static str = "Color";
///
///     fn members() -> &'static [Self] {
///         &[Color::Red, Color::Green]
///     }
///
///     fn to_value(&self) -> Value {
///         match self {
///             Color::Red => json!("ff0000"),
///             Color::Green => json!("00ff00"),
///         }
///     }
/// }
///
/// let result = validate_enumeration_member::<Color>(&json!("00ff00"));
/// assert_eq!(result.into_result(), Ok(Color::Green));
/// ```
pub trait Enumeration: Sized + Clone + 'static {
    /// Name of the enumeration, used in error messages.
    const NAME: &'static str;

    /// Every member of the enumeration.
    fn members() -> &'static [Self];

    /// The value a member is written as.
    fn to_value(&self) -> Value;
}

/// Validates a value as a member of the enumeration `E`.
pub fn validate_enumeration_member<E: Enumeration>(value: &Value) -> ValidationResult<E> {
    match E::members().iter().find(|member| member.to_value() == *value) {
        Some(member) => Validation::Success(member.clone()),
        None => Validation::Failure(ErrorReason::Message(format!(
            "Value cannot be found in {}: {}",
            E::NAME,
            describe(value)
        ))),
    }
}

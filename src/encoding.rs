//! Encoding combinators, the write-side mirror of the validators.
//!
//! Two families compose the same way the validators do:
//! - encoders (`Fn(&T) -> String`) produce text directly
//! - to-JSON converters (`Fn(&T) -> Value`) produce an untyped value that is
//!   serialized afterwards
//!
//! Element encoders are assumed total: everything reaching them has already
//! been validated or constructed by typed code.
//!
//! # Example
//!
//! ```rust
//! use typebind::{basic_to_json, encode_basic, encode_list, encode_optional, list_to_json};
//! use serde_json::json;
//!
//! let encode = encode_list(encode_optional(encode_basic::<i64>));
//! assert_eq!(encode(&vec![Some(1), None, Some(3)]), "[1,null,3]");
//!
//! let to_json = list_to_json(basic_to_json::<String>);
//! assert_eq!(to_json(&vec!["a".to_string()]), json!(["a"]));
//! ```

use serde_json::Value;

use crate::describe::kind_name;
use crate::error::EncodeError;

/// A scalar that encodes to a JSON string, number or boolean.
pub trait BasicValue {
    /// Returns the untyped form of this scalar.
    fn to_basic_json(&self) -> Value;
}

impl BasicValue for str {
    fn to_basic_json(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl BasicValue for String {
    fn to_basic_json(&self) -> Value {
        Value::String(self.clone())
    }
}

impl BasicValue for bool {
    fn to_basic_json(&self) -> Value {
        Value::Bool(*self)
    }
}

macro_rules! impl_basic_number {
    ($($ty:ty),*) => {
        $(
            impl BasicValue for $ty {
                fn to_basic_json(&self) -> Value {
                    Value::from(*self)
                }
            }
        )*
    };
}

// non-finite floats become null, as in serde_json
impl_basic_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl<B: BasicValue + ?Sized> BasicValue for &B {
    fn to_basic_json(&self) -> Value {
        (**self).to_basic_json()
    }
}

/// Encodes a scalar as text.
///
/// Strings are returned as-is (unquoted); numbers and booleans use their JSON
/// spelling, so `1.0f64` encodes as `1.0`.
pub fn encode_basic<B: BasicValue + ?Sized>(value: &B) -> String {
    match value.to_basic_json() {
        Value::String(text) => text,
        other => other.to_string(),
    }
}

/// Converts a scalar to its untyped form.
pub fn basic_to_json<B: BasicValue + ?Sized>(value: &B) -> Value {
    value.to_basic_json()
}

/// Encodes an untyped scalar as text.
///
/// # Errors
///
/// Returns [`EncodeError::Unsupported`] for `null`, arrays and objects.
pub fn encode_basic_value(value: &Value) -> Result<String, EncodeError> {
    match basic_value_to_json(value)? {
        Value::String(text) => Ok(text),
        other => Ok(other.to_string()),
    }
}

/// Checks that an untyped value is a scalar and returns a copy of it.
///
/// # Errors
///
/// Returns [`EncodeError::Unsupported`] for `null`, arrays and objects.
pub fn basic_value_to_json(value: &Value) -> Result<Value, EncodeError> {
    match value {
        Value::String(_) | Value::Number(_) | Value::Bool(_) => Ok(value.clone()),
        other => Err(EncodeError::Unsupported {
            kind: kind_name(other),
        }),
    }
}

/// Returns an encoder writing `None` as `null` and delegating otherwise.
pub fn encode_optional<T, F>(encode: F) -> impl Fn(&Option<T>) -> String
where
    F: Fn(&T) -> String,
{
    move |value: &Option<T>| match value {
        Some(inner) => encode(inner),
        None => "null".to_string(),
    }
}

/// Returns an encoder writing every element in order as `[a,b,c]`.
///
/// The encoder takes `&Vec<T>` rather than `&[T]` so that it is itself an
/// `Fn(&U) -> String` for a sized `U` and nests inside [`encode_optional`]
/// and [`encode_list`].
pub fn encode_list<T, F>(encode: F) -> impl Fn(&Vec<T>) -> String
where
    F: Fn(&T) -> String,
{
    move |values: &Vec<T>| {
        let encoded: Vec<String> = values.iter().map(&encode).collect();
        format!("[{}]", encoded.join(","))
    }
}

/// Returns a converter mapping `None` to `Value::Null` and delegating otherwise.
pub fn optional_to_json<T, F>(to_json: F) -> impl Fn(&Option<T>) -> Value
where
    F: Fn(&T) -> Value,
{
    move |value: &Option<T>| match value {
        Some(inner) => to_json(inner),
        None => Value::Null,
    }
}

/// Returns a converter mapping every element in order into a JSON array.
///
/// Takes `&Vec<T>` for the same reason as [`encode_list`].
pub fn list_to_json<T, F>(to_json: F) -> impl Fn(&Vec<T>) -> Value
where
    F: Fn(&T) -> Value,
{
    move |values: &Vec<T>| Value::Array(values.iter().map(&to_json).collect())
}

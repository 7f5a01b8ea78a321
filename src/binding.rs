//! Traits implemented by typed bindings.
//!
//! A binding is a Rust type that knows how to validate itself from an untyped
//! value ([`Validate`]) and how to turn itself back into one ([`ToJson`]).
//! Implementations for the basic scalars, `Option<T>`, `Vec<T>` and
//! `IndexMap<String, T>` let bindings for larger types compose field
//! validators and encoders from these without naming combinators directly.
//!
//! For every binding the round-trip law holds:
//! `T::decode(value.encode()) == Validation::Success(value)`.
//!
//! # Example
//!
//! ```rust
//! use typebind::{ToJson, Validate};
//!
//! let values: Vec<Option<i64>> = vec![Some(1), None];
//! let text = values.encode();
//!
//! assert_eq!(text, "[1,null]");
//! assert_eq!(Vec::<Option<i64>>::decode(&text).into_result(), Ok(values));
//! ```

use indexmap::IndexMap;
use serde_json::Value;

use crate::decode::validate_from_string;
use crate::encoding::{basic_to_json, list_to_json, optional_to_json};
use crate::validator::{
    validate_bool, validate_float, validate_int, validate_list, validate_optional, validate_string,
    validate_string_map, validate_unknown,
};
use crate::ValidationResult;

/// A type that can be validated from an untyped value.
pub trait Validate: Sized {
    /// Validates an untyped value into `Self`.
    fn validate(value: &Value) -> ValidationResult<Self>;

    /// Parses JSON text and validates it into `Self`.
    fn decode(text: impl AsRef<[u8]>) -> ValidationResult<Self> {
        validate_from_string(text, Self::validate)
    }
}

/// A type that can be converted to an untyped value.
pub trait ToJson {
    /// Converts `self` to its untyped form.
    fn to_json(&self) -> Value;

    /// Serializes `self` as compact JSON text.
    fn encode(&self) -> String {
        self.to_json().to_string()
    }
}

impl Validate for String {
    fn validate(value: &Value) -> ValidationResult<Self> {
        validate_string(value)
    }
}

impl Validate for i64 {
    fn validate(value: &Value) -> ValidationResult<Self> {
        validate_int(value)
    }
}

impl Validate for f64 {
    fn validate(value: &Value) -> ValidationResult<Self> {
        validate_float(value)
    }
}

impl Validate for bool {
    fn validate(value: &Value) -> ValidationResult<Self> {
        validate_bool(value)
    }
}

impl Validate for Value {
    fn validate(value: &Value) -> ValidationResult<Self> {
        validate_unknown(value)
    }
}

impl<T: Validate> Validate for Option<T> {
    fn validate(value: &Value) -> ValidationResult<Self> {
        validate_optional(T::validate)(value)
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(value: &Value) -> ValidationResult<Self> {
        validate_list(T::validate)(value)
    }
}

impl<T: Validate> Validate for IndexMap<String, T> {
    fn validate(value: &Value) -> ValidationResult<Self> {
        validate_string_map(value, T::validate)
    }
}

impl ToJson for String {
    fn to_json(&self) -> Value {
        basic_to_json(self)
    }
}

impl ToJson for str {
    fn to_json(&self) -> Value {
        basic_to_json(self)
    }
}

impl ToJson for i64 {
    fn to_json(&self) -> Value {
        basic_to_json(self)
    }
}

impl ToJson for f64 {
    fn to_json(&self) -> Value {
        basic_to_json(self)
    }
}

impl ToJson for bool {
    fn to_json(&self) -> Value {
        basic_to_json(self)
    }
}

impl ToJson for Value {
    fn to_json(&self) -> Value {
        self.clone()
    }
}

impl<T: ToJson> ToJson for Option<T> {
    fn to_json(&self) -> Value {
        optional_to_json(T::to_json)(self)
    }
}

impl<T: ToJson> ToJson for Vec<T> {
    fn to_json(&self) -> Value {
        list_to_json(T::to_json)(self)
    }
}

impl<T: ToJson> ToJson for IndexMap<String, T> {
    fn to_json(&self) -> Value {
        Value::Object(
            self.iter()
                .map(|(key, value)| (key.clone(), value.to_json()))
                .collect(),
        )
    }
}

impl<T: ToJson + ?Sized> ToJson for &T {
    fn to_json(&self) -> Value {
        (**self).to_json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorReason;
    use serde_json::json;

    #[test]
    fn test_scalars_round_trip() {
        assert_eq!(String::decode("hi".to_string().encode()).into_result(), Ok("hi".to_string()));
        assert_eq!(i64::decode(7i64.encode()).into_result(), Ok(7));
        assert_eq!(f64::decode(1.0f64.encode()).into_result(), Ok(1.0));
        assert_eq!(bool::decode(false.encode()).into_result(), Ok(false));
    }

    #[test]
    fn test_float_binding_rejects_integers() {
        assert_eq!(
            f64::decode("1").into_result(),
            Err(ErrorReason::message("Value is not float: 1 (integer)"))
        );
    }

    #[test]
    fn test_map_preserves_order() {
        let mut map = IndexMap::new();
        map.insert("z".to_string(), 1i64);
        map.insert("a".to_string(), 2i64);

        assert_eq!(map.encode(), r#"{"z":1,"a":2}"#);
        assert_eq!(IndexMap::<String, i64>::validate(&map.to_json()).into_result(), Ok(map));
    }

    #[test]
    fn test_unknown_passes_through() {
        let value = json!({"anything": [1, "two", null]});
        assert_eq!(Value::validate(&value).into_result(), Ok(value.clone()));
        assert_eq!(value.to_json(), value);
    }
}

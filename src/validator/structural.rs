//! Combinators that build validators for containers and alternatives.
//!
//! Error propagation differs per combinator:
//! - `validate_list` stops at the first invalid element
//! - `validate_dict` reports every failing entry, keyed by the original key
//! - `validate_one_of` returns the first alternative that succeeds

use std::hash::Hash;

use indexmap::IndexMap;
use serde_json::{Map, Value};
use stillwater::Validation;

use crate::describe::describe;
use crate::error::ErrorReason;
use crate::ValidationResult;

use super::primitive::validate_string;

/// Borrows the value as an object, or produces the structural mismatch reason.
pub(crate) fn as_object(value: &Value) -> Result<&Map<String, Value>, ErrorReason> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(ErrorReason::Message(format!(
            "Expected dict, got: {}",
            describe(other)
        ))),
    }
}

/// Returns a validator that accepts `null` as `None` and otherwise delegates.
///
/// # Example
///
/// ```rust
/// use typebind::{validate_optional, validate_string};
/// use serde_json::json;
///
/// let maybe_string = validate_optional(validate_string);
/// assert_eq!(maybe_string(&json!(null)).into_result(), Ok(None));
/// assert_eq!(maybe_string(&json!("hi")).into_result(), Ok(Some("hi".to_string())));
/// ```
pub fn validate_optional<T, F>(
    validator: F,
) -> impl Fn(&Value) -> ValidationResult<Option<T>> + Send + Sync
where
    F: Fn(&Value) -> ValidationResult<T> + Send + Sync,
{
    move |value: &Value| {
        if value.is_null() {
            Validation::Success(None)
        } else {
            validator(value).map(Some)
        }
    }
}

/// Returns a validator for arrays whose elements all pass `validator`.
///
/// Validation stops at the first invalid element and returns that element's
/// reason unchanged; later elements are not inspected.
pub fn validate_list<T, F>(validator: F) -> impl Fn(&Value) -> ValidationResult<Vec<T>> + Send + Sync
where
    F: Fn(&Value) -> ValidationResult<T> + Send + Sync,
{
    move |value: &Value| match value {
        Value::Array(items) => Validation::from_result(
            items
                .iter()
                .map(|item| validator(item).into_result())
                .collect::<Result<Vec<_>, _>>(),
        ),
        other => Validation::Failure(ErrorReason::Message(format!(
            "Value is not list: {}",
            describe(other)
        ))),
    }
}

/// Validates an object, checking every key and value independently.
///
/// Keys are handed to `validate_key` as JSON strings. A value is only checked
/// when its key is valid. All failures are collected under the original key;
/// the result is a fresh map from validated keys to validated values.
///
/// # Example
///
/// ```rust
/// use typebind::{validate_dict, validate_string, ErrorReason};
/// use serde_json::json;
///
/// let result = validate_dict(&json!({"a": 1}), validate_string, validate_string);
/// assert_eq!(
///     result.into_result().unwrap_err(),
///     ErrorReason::fields([("a", ErrorReason::message("Value is not string: 1 (integer)"))])
/// );
/// ```
pub fn validate_dict<K, V, FK, FV>(
    value: &Value,
    validate_key: FK,
    validate_value: FV,
) -> ValidationResult<IndexMap<K, V>>
where
    K: Hash + Eq,
    FK: Fn(&Value) -> ValidationResult<K>,
    FV: Fn(&Value) -> ValidationResult<V>,
{
    let map = match as_object(value) {
        Ok(map) => map,
        Err(reason) => return Validation::Failure(reason),
    };

    let mut errors = IndexMap::new();
    let mut validated = IndexMap::with_capacity(map.len());

    for (key, item) in map {
        match validate_key(&Value::String(key.clone())) {
            Validation::Failure(reason) => {
                errors.insert(key.clone(), reason);
            }
            Validation::Success(validated_key) => match validate_value(item) {
                Validation::Success(validated_value) => {
                    validated.insert(validated_key, validated_value);
                }
                Validation::Failure(reason) => {
                    errors.insert(key.clone(), reason);
                }
            },
        }
    }

    if errors.is_empty() {
        Validation::Success(validated)
    } else {
        Validation::Failure(ErrorReason::Fields(errors))
    }
}

/// [`validate_dict`] with string keys.
pub fn validate_string_map<V, FV>(value: &Value, validate_value: FV) -> ValidationResult<IndexMap<String, V>>
where
    FV: Fn(&Value) -> ValidationResult<V>,
{
    validate_dict(value, validate_string, validate_value)
}

/// Returns a validator running [`validate_dict`] with the given key and value validators.
pub fn validate_dict_of<K, V, FK, FV>(
    validate_key: FK,
    validate_value: FV,
) -> impl Fn(&Value) -> ValidationResult<IndexMap<K, V>> + Send + Sync
where
    K: Hash + Eq,
    FK: Fn(&Value) -> ValidationResult<K> + Send + Sync,
    FV: Fn(&Value) -> ValidationResult<V> + Send + Sync,
{
    move |value: &Value| validate_dict(value, &validate_key, &validate_value)
}

/// Returns a validator running [`validate_string_map`] with the given value validator.
pub fn validate_string_map_of<V, FV>(
    validate_value: FV,
) -> impl Fn(&Value) -> ValidationResult<IndexMap<String, V>> + Send + Sync
where
    FV: Fn(&Value) -> ValidationResult<V> + Send + Sync,
{
    move |value: &Value| validate_string_map(value, &validate_value)
}

/// Validates a value as equal to one of the given literals.
///
/// # Example
///
/// ```rust
/// use typebind::validate_one_of_literals;
/// use serde_json::json;
///
/// assert_eq!(validate_one_of_literals(&json!(2), &[1i64, 2, 3]).into_result(), Ok(2));
/// assert!(validate_one_of_literals(&json!(1), &["one", "two"]).is_failure());
/// ```
pub fn validate_one_of_literals<L>(value: &Value, literals: &[L]) -> ValidationResult<L>
where
    L: Clone + Into<Value>,
    Value: PartialEq<L>,
{
    match literals.iter().find(|literal| *value == **literal) {
        Some(literal) => Validation::Success(literal.clone()),
        None => {
            let expected = Value::Array(literals.iter().cloned().map(Into::into).collect());
            Validation::Failure(ErrorReason::Message(format!(
                "Expected one of {}, got: {}",
                expected,
                describe(value)
            )))
        }
    }
}

/// A named validator tried by [`validate_one_of`].
pub struct Alternative<'a, T> {
    name: &'a str,
    validator: &'a dyn Fn(&Value) -> ValidationResult<T>,
}

impl<'a, T> Alternative<'a, T> {
    /// Creates an alternative; `name` appears in the error when nothing matches.
    pub fn new(name: &'a str, validator: &'a dyn Fn(&Value) -> ValidationResult<T>) -> Self {
        Self { name, validator }
    }

    /// Returns the alternative's name.
    pub fn name(&self) -> &str {
        self.name
    }
}

/// Tries each alternative in order, returning the first success.
///
/// # Example
///
/// ```rust
/// use typebind::{validate_one_of, validate_optional, validate_string, Alternative};
/// use serde_json::json;
///
/// let text = |v: &serde_json::Value| validate_string(v).map(Some);
/// let nothing = validate_optional(validate_string);
///
/// let result = validate_one_of(
///     &json!(null),
///     &[Alternative::new("text", &text), Alternative::new("nothing", &nothing)],
/// );
/// assert_eq!(result.into_result(), Ok(None));
/// ```
pub fn validate_one_of<T>(value: &Value, alternatives: &[Alternative<'_, T>]) -> ValidationResult<T> {
    for alternative in alternatives {
        if let Validation::Success(validated) = (alternative.validator)(value) {
            return Validation::Success(validated);
        }
    }

    let names: Vec<&str> = alternatives.iter().map(Alternative::name).collect();
    Validation::Failure(ErrorReason::Message(format!(
        "Expected to match one of {:?}, got: {}",
        names,
        describe(value)
    )))
}

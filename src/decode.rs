//! Decoding JSON text into validated values.
//!
//! This module provides the [`Decoder`] type that parses text into an untyped
//! [`Value`], enforces a nesting limit, and hands the result to a validator.
//! [`validate_from_string`] is the same with default settings.

use serde_json::Value;
use stillwater::Validation;

use crate::error::ErrorReason;
use crate::ValidationResult;

/// Default maximum nesting depth, equal to serde_json's own recursion limit.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Parses JSON text and validates the result.
///
/// Validators recurse once per nesting level of their input, so the decoder
/// rejects documents nested deeper than `max_depth` before any validator
/// runs. serde_json refuses documents nested deeper than 128 levels while
/// parsing, so limits above that have no further effect.
///
/// # Example
///
/// ```rust
/// use typebind::{validate_int, validate_list, Decoder, ErrorReason};
///
/// let decoder = Decoder::new().with_max_depth(1);
///
/// assert_eq!(decoder.decode("[1, 2]", validate_list(validate_int)).into_result(), Ok(vec![1, 2]));
/// assert_eq!(
///     decoder.decode("[[1], [2]]", validate_list(validate_list(validate_int))).into_result(),
///     Err(ErrorReason::message("Maximum nesting depth of 1 exceeded"))
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoder {
    max_depth: usize,
}

impl Decoder {
    /// Creates a decoder with the default depth limit (128).
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets the maximum nesting depth.
    ///
    /// Scalars have depth 0; each enclosing array or object adds one.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Returns the maximum allowed nesting depth.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Parses text (or UTF-8 bytes) into an untyped value.
    ///
    /// Syntax errors, invalid UTF-8 and over-deep nesting are all invalid
    /// results, never panics.
    pub fn parse(&self, input: impl AsRef<[u8]>) -> ValidationResult<Value> {
        let value: Value = match serde_json::from_slice(input.as_ref()) {
            Ok(value) => value,
            Err(err) => {
                tracing::debug!(error = %err, "rejecting input that is not valid JSON");
                return Validation::Failure(ErrorReason::message("Invalid JSON"));
            }
        };

        if exceeds_depth(&value, self.max_depth) {
            tracing::debug!(max_depth = self.max_depth, "rejecting input nested too deeply");
            return Validation::Failure(ErrorReason::Message(format!(
                "Maximum nesting depth of {} exceeded",
                self.max_depth
            )));
        }

        Validation::Success(value)
    }

    /// Parses text and runs `validator` on the parsed value.
    ///
    /// The validator is not invoked when parsing fails.
    pub fn decode<T, F>(&self, input: impl AsRef<[u8]>, validator: F) -> ValidationResult<T>
    where
        F: FnOnce(&Value) -> ValidationResult<T>,
    {
        match self.parse(input) {
            Validation::Success(value) => match validator(&value) {
                Validation::Success(validated) => Validation::Success(validated),
                Validation::Failure(reason) => Validation::Failure(reason),
            },
            Validation::Failure(reason) => Validation::Failure(reason),
        }
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses JSON text and validates it with `validator`.
///
/// Malformed text yields `Invalid JSON` without running the validator.
///
/// # Example
///
/// ```rust
/// use typebind::{validate_from_string, validate_int, validate_list, ErrorReason};
///
/// let result = validate_from_string("[1, 2, 3, 4]", validate_list(validate_int));
/// assert_eq!(result.into_result(), Ok(vec![1, 2, 3, 4]));
///
/// let result = validate_from_string("[1, 2", validate_list(validate_int));
/// assert_eq!(result.into_result(), Err(ErrorReason::message("Invalid JSON")));
/// ```
pub fn validate_from_string<T, F>(input: impl AsRef<[u8]>, validator: F) -> ValidationResult<T>
where
    F: FnOnce(&Value) -> ValidationResult<T>,
{
    Decoder::default().decode(input, validator)
}

/// Returns true if `value` nests arrays/objects deeper than `max_depth`.
///
/// Walks the tree with an explicit stack.
fn exceeds_depth(value: &Value, max_depth: usize) -> bool {
    let mut stack = vec![(value, 0usize)];

    while let Some((current, depth)) = stack.pop() {
        match current {
            Value::Array(items) => {
                if depth >= max_depth {
                    return true;
                }
                stack.extend(items.iter().map(|child| (child, depth + 1)));
            }
            Value::Object(map) => {
                if depth >= max_depth {
                    return true;
                }
                stack.extend(map.values().map(|child| (child, depth + 1)));
            }
            _ => {}
        }
    }

    false
}

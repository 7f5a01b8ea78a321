//! Tagged-union dispatch.
//!
//! A tagged union is written as an object whose tag field names the variant:
//!
//! - with [`TagPlacement::Data`] the payload sits under `"data"`:
//!   `{"type": "Definitely", "data": 42}`
//! - with [`TagPlacement::Embedded`] the payload's own fields sit next to the
//!   tag: `{"type": "Circle", "radius": 2.0}`
//!
//! [`TaggedValidators`] is the dispatch table from tag to variant. It is built
//! once per union type and can be kept in a `static`.

use std::fmt;

use indexmap::IndexMap;
use serde_json::Value;
use stillwater::Validation;

use crate::describe::describe;
use crate::error::ErrorReason;
use crate::ValidationResult;

use super::interface::{InterfaceSpecification, ValidatedFields};
use super::structural::as_object;

/// Field holding the payload of a non-embedded variant.
pub const DATA_FIELD: &str = "data";

/// Where a tagged union keeps its variant payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagPlacement {
    /// Payload nested under the `"data"` field.
    #[default]
    Data,
    /// Payload fields inline with the tag field.
    Embedded,
}

enum Branch<T> {
    Payload(Box<dyn Fn(&Value) -> ValidationResult<T> + Send + Sync>),
    Unit(Box<dyn Fn() -> T + Send + Sync>),
}

/// Dispatch table from tag value to the variant it selects.
///
/// # Example
///
/// ```rust
/// use typebind::{validate_int, validate_with_type_tags, TagPlacement, TaggedValidators};
/// use serde_json::json;
///
/// #[derive(Debug, PartialEq)]
/// enum Possibly { NotReally, Definitely(i64) }
///
/// let possibly = TaggedValidators::new()
///     .unit("NotReally", || Possibly::NotReally)
///     .variant("Definitely", validate_int, Possibly::Definitely);
///
/// let result = validate_with_type_tags(
///     &json!({"type": "Definitely", "data": 42}),
///     "type",
///     &possibly,
///     TagPlacement::Data,
/// );
/// assert_eq!(result.into_result(), Ok(Possibly::Definitely(42)));
/// ```
pub struct TaggedValidators<T> {
    branches: IndexMap<String, Branch<T>>,
}

impl<T> TaggedValidators<T> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            branches: IndexMap::new(),
        }
    }

    /// Registers a variant carrying a payload.
    ///
    /// `validator` checks the payload (the `"data"` value, or the whole object
    /// when embedded) and `constructor` wraps it into the union type.
    pub fn variant<P, V, C>(mut self, tag: impl Into<String>, validator: V, constructor: C) -> Self
    where
        V: Fn(&Value) -> ValidationResult<P> + Send + Sync + 'static,
        C: Fn(P) -> T + Send + Sync + 'static,
    {
        self.branches.insert(
            tag.into(),
            Branch::Payload(Box::new(move |value: &Value| validator(value).map(&constructor))),
        );
        self
    }

    /// Registers a variant without payload. No `"data"` field is required.
    pub fn unit<C>(mut self, tag: impl Into<String>, constructor: C) -> Self
    where
        C: Fn() -> T + Send + Sync + 'static,
    {
        self.branches
            .insert(tag.into(), Branch::Unit(Box::new(constructor)));
        self
    }

    /// Returns the registered tags in registration order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.branches.keys().map(String::as_str)
    }

    /// Validates a value against this table. See [`validate_with_type_tags`].
    pub fn validate(&self, value: &Value, tag_field: &str, placement: TagPlacement) -> ValidationResult<T> {
        let object = match as_object(value) {
            Ok(object) => object,
            Err(reason) => return Validation::Failure(reason),
        };

        let tag = match object.get(tag_field) {
            Some(tag) => tag,
            None => {
                return Validation::Failure(ErrorReason::Message(format!(
                    "Missing tag field: {}",
                    tag_field
                )))
            }
        };

        let branch = match tag.as_str().and_then(|name| self.branches.get(name)) {
            Some(branch) => branch,
            None => {
                tracing::trace!(tag_field, tag = %tag, "no variant registered for tag");
                return Validation::Failure(ErrorReason::Message(format!(
                    "Unknown type tag: {}, expected one of: {}",
                    describe(tag),
                    self.tags().collect::<Vec<_>>().join(", ")
                )));
            }
        };

        match (branch, placement) {
            (Branch::Unit(constructor), _) => Validation::Success(constructor()),
            (Branch::Payload(validator), TagPlacement::Embedded) => validator(value),
            (Branch::Payload(validator), TagPlacement::Data) => match object.get(DATA_FIELD) {
                Some(data) => match validator(data) {
                    Validation::Success(validated) => Validation::Success(validated),
                    Validation::Failure(reason) => {
                        Validation::Failure(ErrorReason::fields([(DATA_FIELD, reason)]))
                    }
                },
                None => Validation::Failure(ErrorReason::message(
                    "Missing data field for non-embedded structure",
                )),
            },
        }
    }
}

impl<T> Default for TaggedValidators<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for TaggedValidators<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaggedValidators")
            .field("tags", &self.tags().collect::<Vec<_>>())
            .finish()
    }
}

/// Validates a tagged union value.
///
/// The value must be an object holding `tag_field`, whose value must be one of
/// the registered tags. A payload variant then validates its payload: the
/// `"data"` field for [`TagPlacement::Data`], or the whole object for
/// [`TagPlacement::Embedded`]. A unit variant needs nothing beyond the tag.
///
/// With [`TagPlacement::Data`] the payload validator's reason is not returned
/// as-is: it is nested one level deeper, as `{"data": <reason>}`, so that
/// failures inside nested unions read as `data.data.<field>`. Embedded payload
/// reasons are returned unchanged.
pub fn validate_with_type_tags<T>(
    value: &Value,
    tag_field: &str,
    validators: &TaggedValidators<T>,
    placement: TagPlacement,
) -> ValidationResult<T> {
    validators.validate(value, tag_field, placement)
}

/// Validates a single variant: `tag_field` must equal `tag_value` and the
/// remaining shape must satisfy `spec`.
///
/// Tag and field failures are reported together, the tag first.
///
/// # Example
///
/// ```rust
/// use typebind::{validate_int, validate_with_type_tag, InterfaceSpecification};
/// use serde_json::json;
///
/// let spec = InterfaceSpecification::new().field("data", validate_int);
///
/// let result = validate_with_type_tag(&json!({"type": "Definitely", "data": 42}), "type", "Definitely", &spec);
/// assert_eq!(result.into_result().unwrap().take::<i64>("data"), Ok(42));
/// ```
pub fn validate_with_type_tag(
    value: &Value,
    tag_field: &str,
    tag_value: &str,
    spec: &InterfaceSpecification,
) -> ValidationResult<ValidatedFields> {
    let object = match as_object(value) {
        Ok(object) => object,
        Err(reason) => return Validation::Failure(reason),
    };

    let tag_error = match object.get(tag_field) {
        None => {
            return Validation::Failure(ErrorReason::Message(format!(
                "Missing tag field: {}",
                tag_field
            )))
        }
        Some(tag) if *tag == tag_value => None,
        Some(tag) => Some(ErrorReason::Message(format!(
            "Expected {}, got: {}",
            Value::from(tag_value),
            describe(tag)
        ))),
    };

    match (spec.validate(value), tag_error) {
        (result, None) => result,
        (Validation::Success(_), Some(tag_error)) => {
            Validation::Failure(ErrorReason::fields([(tag_field, tag_error)]))
        }
        (Validation::Failure(ErrorReason::Fields(field_errors)), Some(tag_error)) => {
            let mut errors = IndexMap::with_capacity(field_errors.len() + 1);
            errors.insert(tag_field.to_string(), tag_error);
            for (name, reason) in field_errors {
                errors.entry(name).or_insert(reason);
            }
            Validation::Failure(ErrorReason::Fields(errors))
        }
        (Validation::Failure(reason), Some(_)) => Validation::Failure(reason),
    }
}

//! Validation of object shapes against a field specification.
//!
//! This module provides [`InterfaceSpecification`], an ordered set of named
//! field validators, and [`ValidatedFields`], the typed values it produces.
//! Bindings turn the validated fields into their own struct, either by hand or
//! through [`validate_interface_with`].

use std::any::Any;
use std::fmt;

use indexmap::IndexMap;
use serde_json::Value;
use stillwater::Validation;

use crate::error::{ErrorReason, FieldAccessError};
use crate::ValidationResult;

use super::structural::as_object;

type ErasedValidator = Box<dyn Fn(&Value) -> ValidationResult<Box<dyn Any>> + Send + Sync>;

/// A mapping from field name to the validator for that field's value.
///
/// Fields are checked in declaration order and every failure is collected.
/// Properties present in the input but not declared are ignored.
///
/// Specifications are immutable once built and can be kept in a `static`.
///
/// # Example
///
/// ```rust
/// use typebind::{validate_int, validate_optional, validate_string, InterfaceSpecification};
/// use serde_json::json;
///
/// let spec = InterfaceSpecification::new()
///     .field("id", validate_int)
///     .field("message", validate_string)
///     .field("sender", validate_optional(validate_string));
///
/// let mut fields = spec
///     .validate(&json!({"id": 1, "message": "Hello!", "sender": null}))
///     .into_result()
///     .unwrap();
///
/// assert_eq!(fields.take::<i64>("id"), Ok(1));
/// assert_eq!(fields.take::<Option<String>>("sender"), Ok(None));
/// ```
pub struct InterfaceSpecification {
    fields: IndexMap<String, ErasedValidator>,
}

impl InterfaceSpecification {
    /// Creates a specification with no fields.
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }

    /// Declares a field and the validator for its value.
    ///
    /// Declaring the same name twice replaces the earlier validator but keeps
    /// the original position.
    pub fn field<T, F>(mut self, name: impl Into<String>, validator: F) -> Self
    where
        T: 'static,
        F: Fn(&Value) -> ValidationResult<T> + Send + Sync + 'static,
    {
        self.fields.insert(
            name.into(),
            Box::new(move |value: &Value| validator(value).map(|v| Box::new(v) as Box<dyn Any>)),
        );
        self
    }

    /// Returns the declared field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Returns the number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no fields are declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Validates a value against this specification.
    ///
    /// Every declared field must be present. An absent field is reported as
    /// `Missing key: <field>` without running its validator, so optional
    /// fields are written as explicit `null`.
    pub fn validate(&self, value: &Value) -> ValidationResult<ValidatedFields> {
        let object = match as_object(value) {
            Ok(object) => object,
            Err(reason) => return Validation::Failure(reason),
        };

        let mut errors = IndexMap::new();
        let mut validated = IndexMap::with_capacity(self.fields.len());

        for (name, validator) in &self.fields {
            match object.get(name) {
                Some(field_value) => match validator(field_value) {
                    Validation::Success(v) => {
                        validated.insert(name.clone(), v);
                    }
                    Validation::Failure(reason) => {
                        errors.insert(name.clone(), reason);
                    }
                },
                None => {
                    errors.insert(
                        name.clone(),
                        ErrorReason::Message(format!("Missing key: {}", name)),
                    );
                }
            }
        }

        if errors.is_empty() {
            Validation::Success(ValidatedFields { values: validated })
        } else {
            Validation::Failure(ErrorReason::Fields(errors))
        }
    }
}

impl Default for InterfaceSpecification {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for InterfaceSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterfaceSpecification")
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// The typed values produced by a successful interface validation.
///
/// Each declared field holds the value its validator produced. Bindings move
/// values out with [`take`](Self::take), naming the type the field's validator
/// returns.
#[derive(Debug)]
pub struct ValidatedFields {
    values: IndexMap<String, Box<dyn Any>>,
}

impl ValidatedFields {
    /// Moves a field's value out.
    ///
    /// # Errors
    ///
    /// Returns [`FieldAccessError::Missing`] if the field was not declared or
    /// has already been taken, and [`FieldAccessError::TypeMismatch`] if the
    /// field's validator produced a different type. A mismatched value stays
    /// in place.
    pub fn take<T: 'static>(&mut self, name: &str) -> Result<T, FieldAccessError> {
        let value = self
            .values
            .get(name)
            .ok_or_else(|| FieldAccessError::Missing(name.to_string()))?;

        if !(**value).is::<T>() {
            return Err(FieldAccessError::TypeMismatch {
                field: name.to_string(),
                expected: std::any::type_name::<T>(),
            });
        }

        match self.values.shift_remove(name).map(|v| v.downcast::<T>()) {
            Some(Ok(typed)) => Ok(*typed),
            _ => Err(FieldAccessError::Missing(name.to_string())),
        }
    }

    /// Borrows a field's value if it exists and has type `T`.
    pub fn get<T: 'static>(&self, name: &str) -> Option<&T> {
        self.values.get(name).and_then(|v| v.downcast_ref::<T>())
    }

    /// Returns true if the field is still held.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Returns the names of the fields still held, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Returns the number of fields still held.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no fields are held.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Validates a value against an interface specification.
pub fn validate_interface(value: &Value, spec: &InterfaceSpecification) -> ValidationResult<ValidatedFields> {
    spec.validate(value)
}

/// Validates a value against an interface specification and builds `T` from the fields.
///
/// A constructor error means the binding asked for a field or type the
/// specification does not provide; it is reported as an invalid result rather
/// than a panic.
///
/// # Example
///
/// ```rust
/// use typebind::{validate_int, validate_interface_with, validate_string, InterfaceSpecification};
/// use serde_json::json;
///
/// #[derive(Debug, PartialEq)]
/// struct Payload { id: i64, message: String }
///
/// let spec = InterfaceSpecification::new()
///     .field("id", validate_int)
///     .field("message", validate_string);
///
/// let result = validate_interface_with(&json!({"id": 0, "message": "Hello!"}), &spec, |mut f| {
///     Ok(Payload { id: f.take("id")?, message: f.take("message")? })
/// });
///
/// assert_eq!(result.into_result(), Ok(Payload { id: 0, message: "Hello!".to_string() }));
/// ```
pub fn validate_interface_with<T, C>(
    value: &Value,
    spec: &InterfaceSpecification,
    constructor: C,
) -> ValidationResult<T>
where
    C: FnOnce(ValidatedFields) -> Result<T, FieldAccessError>,
{
    match spec.validate(value) {
        Validation::Success(fields) => match constructor(fields) {
            Ok(constructed) => Validation::Success(constructed),
            Err(err) => Validation::Failure(ErrorReason::Message(err.to_string())),
        },
        Validation::Failure(reason) => Validation::Failure(reason),
    }
}

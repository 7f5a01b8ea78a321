//! Errors raised by misuse of the binding API.
//!
//! Invalid *input* is never reported through these types; it is a
//! [`Validation::Failure`](stillwater::Validation) carrying an
//! [`ErrorReason`](super::ErrorReason). These errors mean a binding asked for
//! something the validated data cannot provide.

/// Failure to extract a typed field from [`ValidatedFields`](crate::ValidatedFields).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldAccessError {
    /// The field was not declared in the interface, or was already taken.
    #[error("field '{0}' is not available")]
    Missing(String),

    /// The field holds a value of a different type than requested.
    #[error("field '{field}' does not hold a value of type {expected}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
    },
}

/// Failure to encode an untyped value through the basic-value encoders.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// Only strings, numbers and booleans are basic values.
    #[error("Unsupported type: {kind}")]
    Unsupported { kind: &'static str },
}

//! Error types for validation failures and binding misuse.
//!
//! [`ErrorReason`] describes why input failed validation. [`FieldAccessError`]
//! and [`EncodeError`] report mistakes made by binding code.

mod binding_error;
mod reason;

pub use binding_error::{EncodeError, FieldAccessError};
pub use reason::ErrorReason;

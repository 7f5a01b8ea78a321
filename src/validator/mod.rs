//! Validator combinators.
//!
//! A validator is any function `Fn(&Value) -> ValidationResult<T>`. Primitive
//! validators check scalar values; combinators take validators and return new
//! ones, so `validate_list(validate_optional(validate_string))` is itself a
//! validator for `Vec<Option<String>>`.
//!
//! # Example
//!
//! ```rust
//! use typebind::{validate_int, validate_list, ErrorReason};
//! use serde_json::json;
//!
//! let ints = validate_list(validate_int);
//!
//! assert_eq!(ints(&json!([1, 2, 3])).into_result(), Ok(vec![1, 2, 3]));
//! assert_eq!(
//!     ints(&json!([1, 2, "x", 4])).into_result(),
//!     Err(ErrorReason::message("Value is not int: \"x\" (string)"))
//! );
//! ```

mod interface;
mod primitive;
mod structural;
mod tagged;

use serde_json::Value;

use crate::ValidationResult;

pub use interface::{validate_interface, validate_interface_with, InterfaceSpecification, ValidatedFields};
pub use primitive::{
    validate_bool, validate_enumeration_member, validate_float, validate_int, validate_literal,
    validate_string, validate_unknown, validate_utf8, Enumeration,
};
pub use structural::{
    validate_dict, validate_dict_of, validate_list, validate_one_of, validate_one_of_literals,
    validate_optional, validate_string_map, validate_string_map_of, Alternative,
};
pub use tagged::{
    validate_with_type_tag, validate_with_type_tags, TagPlacement, TaggedValidators, DATA_FIELD,
};

/// A validator stored behind a pointer, for tables and struct fields.
pub type BoxedValidator<T> = Box<dyn Fn(&Value) -> ValidationResult<T> + Send + Sync>;

/// Boxes a validator.
pub fn boxed<T, F>(validator: F) -> BoxedValidator<T>
where
    F: Fn(&Value) -> ValidationResult<T> + Send + Sync + 'static,
{
    Box::new(validator)
}

//! # Typebind
//!
//! Runtime validation and encode/decode combinators for untyped JSON, used as
//! the support layer for typed bindings generated from a schema.
//!
//! ## Overview
//!
//! A validator is a function from an untyped [`serde_json::Value`] to a
//! [`ValidationResult`]. Small validators for scalars combine into validators
//! for lists, maps, object shapes and tagged unions. Object and map validation
//! accumulate every failure into a nested [`ErrorReason`], so callers see all
//! problems in one pass. Encoding combinators mirror the validators in the
//! other direction.
//!
//! ## Core Types
//!
//! - [`ErrorReason`]: a message, or a mapping from field name to nested reason
//! - [`InterfaceSpecification`]: the field validators of an object shape
//! - [`TaggedValidators`]: the variants of a tagged union, keyed by tag
//! - [`Decoder`]: parses JSON text and applies a validator
//! - [`Validate`] / [`ToJson`]: implemented by typed bindings
//!
//! ## Example
//!
//! ```rust
//! use typebind::{validate_from_string, validate_int, validate_list, ErrorReason};
//!
//! let result = validate_from_string("[1, 2, 3]", validate_list(validate_int));
//! assert_eq!(result.into_result(), Ok(vec![1, 2, 3]));
//!
//! let result = validate_from_string(r#"[1, 2, "x", 4]"#, validate_list(validate_int));
//! assert_eq!(
//!     result.into_result(),
//!     Err(ErrorReason::message("Value is not int: \"x\" (string)"))
//! );
//! ```

pub mod binding;
pub mod decode;
pub mod describe;
pub mod encoding;
pub mod error;
pub mod path;
pub mod validator;

pub use binding::{ToJson, Validate};
pub use decode::{validate_from_string, Decoder, DEFAULT_MAX_DEPTH};
pub use describe::{describe, kind_name};
pub use encoding::{
    basic_to_json, basic_value_to_json, encode_basic, encode_basic_value, encode_list,
    encode_optional, list_to_json, optional_to_json, BasicValue,
};
pub use error::{EncodeError, ErrorReason, FieldAccessError};
pub use path::ErrorPath;
pub use validator::{
    boxed, validate_bool, validate_dict, validate_dict_of, validate_enumeration_member,
    validate_float, validate_int, validate_interface, validate_interface_with, validate_list,
    validate_literal, validate_one_of, validate_one_of_literals, validate_optional,
    validate_string, validate_string_map, validate_string_map_of, validate_unknown, validate_utf8,
    validate_with_type_tag, validate_with_type_tags, Alternative, BoxedValidator, Enumeration,
    InterfaceSpecification, TagPlacement, TaggedValidators, ValidatedFields, DATA_FIELD,
};

/// Type alias for validation results carrying an [`ErrorReason`].
pub type ValidationResult<T> = stillwater::Validation<T, ErrorReason>;

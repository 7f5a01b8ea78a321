//! Validation failure reasons.
//!
//! This module provides [`ErrorReason`], the payload of every failed
//! validation: either a plain message or a mapping from field name to a nested
//! reason.

use std::fmt::{self, Display};

use indexmap::IndexMap;

use crate::path::ErrorPath;

/// Why a value failed validation.
///
/// Structural validators (`validate_interface`, `validate_dict`, tagged
/// unions) report one entry per failing field, so a reason is a tree whose
/// leaves are messages. Field order follows the order in which the validator
/// visited the fields: declaration order for interfaces, input order for
/// dicts.
///
/// # Example
///
/// ```rust
/// use typebind::ErrorReason;
///
/// let reason = ErrorReason::fields([
///     ("id", ErrorReason::message("Missing key: id")),
///     ("data", ErrorReason::fields([("message", ErrorReason::message("Value is not string: 1 (integer)"))])),
/// ]);
///
/// assert_eq!(reason.field("id").and_then(|r| r.as_message()), Some("Missing key: id"));
/// assert_eq!(reason.leaves().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorReason {
    /// A single human-readable message.
    Message(String),
    /// Failures keyed by field name (or original mapping key).
    Fields(IndexMap<String, ErrorReason>),
}

impl ErrorReason {
    /// Creates a message reason.
    pub fn message(text: impl Into<String>) -> Self {
        ErrorReason::Message(text.into())
    }

    /// Creates a field mapping reason from `(name, reason)` pairs.
    ///
    /// Validators only build mappings with at least one entry.
    pub fn fields<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, ErrorReason)>,
        K: Into<String>,
    {
        ErrorReason::Fields(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Returns the message if this is a [`ErrorReason::Message`].
    pub fn as_message(&self) -> Option<&str> {
        match self {
            ErrorReason::Message(text) => Some(text),
            ErrorReason::Fields(_) => None,
        }
    }

    /// Returns the field mapping if this is a [`ErrorReason::Fields`].
    pub fn as_fields(&self) -> Option<&IndexMap<String, ErrorReason>> {
        match self {
            ErrorReason::Message(_) => None,
            ErrorReason::Fields(fields) => Some(fields),
        }
    }

    /// Returns the reason recorded for a single field.
    pub fn field(&self, name: &str) -> Option<&ErrorReason> {
        self.as_fields().and_then(|fields| fields.get(name))
    }

    /// Follows a sequence of field names down the tree.
    ///
    /// An empty path returns `self`.
    pub fn at<'a, I>(&self, path: I) -> Option<&ErrorReason>
    where
        I: IntoIterator<Item = &'a str>,
    {
        path.into_iter()
            .try_fold(self, |reason, name| reason.field(name))
    }

    /// Flattens the tree into `(path, message)` pairs in visiting order.
    pub fn leaves(&self) -> Vec<(ErrorPath, &str)> {
        let mut leaves = Vec::new();
        let mut stack = vec![(ErrorPath::root(), self)];

        while let Some((path, reason)) = stack.pop() {
            match reason {
                ErrorReason::Message(text) => leaves.push((path, text.as_str())),
                ErrorReason::Fields(fields) => {
                    // reversed so the first field is popped first
                    for (name, nested) in fields.iter().rev() {
                        stack.push((path.push_field(name.as_str()), nested));
                    }
                }
            }
        }

        leaves
    }
}

impl From<&str> for ErrorReason {
    fn from(text: &str) -> Self {
        ErrorReason::Message(text.to_string())
    }
}

impl From<String> for ErrorReason {
    fn from(text: String) -> Self {
        ErrorReason::Message(text)
    }
}

impl Display for ErrorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorReason::Message(text) => write!(f, "{}", text),
            ErrorReason::Fields(fields) => {
                write!(f, "{{")?;
                for (i, (name, reason)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", name, reason)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl std::error::Error for ErrorReason {}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ErrorReason>();
    assert_sync::<ErrorReason>();
};

#[cfg(test)]
mod tests {
    use super::*;

    fn nested() -> ErrorReason {
        ErrorReason::fields([
            ("userId", ErrorReason::message("Missing key: userId")),
            (
                "notification",
                ErrorReason::fields([
                    ("id", ErrorReason::message("Value is not int: \"x\" (string)")),
                    ("seen", ErrorReason::message("Missing key: seen")),
                ]),
            ),
        ])
    }

    #[test]
    fn test_message_accessors() {
        let reason = ErrorReason::message("Invalid JSON");
        assert_eq!(reason.as_message(), Some("Invalid JSON"));
        assert!(reason.as_fields().is_none());
        assert!(reason.field("anything").is_none());
    }

    #[test]
    fn test_field_lookup() {
        let reason = nested();
        assert_eq!(
            reason.field("userId").and_then(|r| r.as_message()),
            Some("Missing key: userId")
        );
        assert!(reason.field("missing").is_none());
    }

    #[test]
    fn test_at_follows_path() {
        let reason = nested();
        assert_eq!(
            reason
                .at(["notification", "seen"])
                .and_then(|r| r.as_message()),
            Some("Missing key: seen")
        );
        assert_eq!(reason.at(Vec::<&str>::new()), Some(&reason));
        assert!(reason.at(["userId", "deeper"]).is_none());
    }

    #[test]
    fn test_leaves_in_visiting_order() {
        let reason = nested();
        let leaves: Vec<_> = reason
            .leaves()
            .into_iter()
            .map(|(path, msg)| (path.to_string(), msg.to_string()))
            .collect();

        assert_eq!(
            leaves,
            vec![
                ("userId".to_string(), "Missing key: userId".to_string()),
                (
                    "notification.id".to_string(),
                    "Value is not int: \"x\" (string)".to_string()
                ),
                (
                    "notification.seen".to_string(),
                    "Missing key: seen".to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_leaves_of_message_is_root() {
        let reason = ErrorReason::from("boom");
        let leaves = reason.leaves();
        assert_eq!(leaves.len(), 1);
        assert!(leaves[0].0.is_root());
        assert_eq!(leaves[0].1, "boom");
    }

    #[test]
    fn test_display() {
        let reason = ErrorReason::fields([
            ("a", ErrorReason::message("bad")),
            ("b", ErrorReason::fields([("c", ErrorReason::message("worse"))])),
        ]);
        assert_eq!(reason.to_string(), "{a: bad, b: {c: worse}}");
    }

    #[test]
    fn test_field_order_does_not_affect_equality() {
        let left = ErrorReason::fields([
            ("a", ErrorReason::message("1")),
            ("b", ErrorReason::message("2")),
        ]);
        let right = ErrorReason::fields([
            ("b", ErrorReason::message("2")),
            ("a", ErrorReason::message("1")),
        ]);
        assert_eq!(left, right);
    }
}

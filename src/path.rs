//! Field paths into nested error mappings.
//!
//! [`ErrorPath`] names a leaf inside an [`ErrorReason`](crate::ErrorReason)
//! tree, e.g. `data.notification.id`, so nested failures can be reported as a
//! flat list.

use std::fmt::{self, Display};

/// A path of field (or mapping key) names leading to a nested error.
///
/// # Example
///
/// ```rust
/// use typebind::ErrorPath;
///
/// let path = ErrorPath::root()
///     .push_field("data")
///     .push_field("notification")
///     .push_field("id");
///
/// assert_eq!(path.to_string(), "data.notification.id");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ErrorPath {
    segments: Vec<String>,
}

impl ErrorPath {
    /// Creates an empty path pointing at the validated value itself.
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a path from a single field name.
    pub fn from_field(name: impl Into<String>) -> Self {
        Self {
            segments: vec![name.into()],
        }
    }

    /// Returns a new path with a field appended, leaving `self` untouched.
    pub fn push_field(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.into());
        Self { segments }
    }

    /// Returns true if this is the root path (no segments).
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments in this path.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if this path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the field names in this path.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }

    /// Returns the parent path, or None if this is root.
    pub fn parent(&self) -> Option<Self> {
        if self.segments.is_empty() {
            None
        } else {
            Some(Self {
                segments: self.segments[..self.segments.len() - 1].to_vec(),
            })
        }
    }

    /// Returns the last field name, or None if this is root.
    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }
}

impl Display for ErrorPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "(root)");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

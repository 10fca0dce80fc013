//! Error types for dotted-path resolution.

use std::fmt;

/// Errors that can occur while resolving a dotted path.
///
/// All variants are caller-input or tree-shape errors; none are transient,
/// so there is nothing to retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// The path string was empty.
    MissingPath,
    /// The path contained an empty field name, e.g. `a..b` or a leading
    /// or trailing dot.
    InvalidPath { path: String },
    /// A field name remained to consume, but the current value is a
    /// terminal rather than a mapping.
    NotAMapping { path: String, field: String },
    /// The next field name does not exist in the current mapping.
    KeyNotFound { path: String, field: String },
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessError::MissingPath => write!(f, "No path given"),
            AccessError::InvalidPath { path } => {
                write!(f, "Invalid path '{}': empty field name", path)
            }
            AccessError::NotAMapping { path, field } => write!(
                f,
                "Cannot look up '{}' in path '{}': value is not a mapping",
                field, path
            ),
            AccessError::KeyNotFound { path, field } => {
                write!(f, "No field named '{}' in path '{}'", field, path)
            }
        }
    }
}

impl std::error::Error for AccessError {}

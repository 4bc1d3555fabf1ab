//! Error types for the story editor.
//!
//! Store operations themselves never fail; these cover parsing wire names
//! and JSON encoding at the crate's edges.

use thiserror::Error;

/// Result type alias for fallible editor operations.
pub type EditorResult<T> = Result<T, EditorError>;

/// Errors that can occur at the editor's boundaries.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    /// A string did not name any variant of an enumerated field.
    #[error("Unknown {kind}: '{value}'")]
    UnknownVariant { kind: &'static str, value: String },

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl EditorError {
    /// Creates an UnknownVariant error.
    pub fn unknown_variant(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownVariant {
            kind,
            value: value.into(),
        }
    }
}

impl From<serde_json::Error> for EditorError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

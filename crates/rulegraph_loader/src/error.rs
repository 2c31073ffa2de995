//! Load error types.

use thiserror::Error;

/// Errors that can occur while loading a network description.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The document is not valid JSON/JSONC or does not have the expected shape.
    #[error("Invalid document: {message}")]
    InvalidDocument {
        /// Error message.
        message: String,
    },

    /// The document contains no value at all.
    #[error("Empty document")]
    EmptyDocument,

    /// A node declares the wrong number of type parameters.
    #[error("{kind} node at {path} expects {expected} type(s), found {found}")]
    Arity {
        kind: &'static str,
        path: String,
        expected: usize,
        found: usize,
    },

    /// A node lacks an attribute its kind requires.
    #[error("{kind} node at {path} is missing `{attribute}`")]
    MissingAttribute {
        kind: &'static str,
        path: String,
        attribute: &'static str,
    },

    /// A node attribute has an unusable value.
    #[error("{kind} node at {path} has invalid `{attribute}`: {message}")]
    InvalidAttribute {
        kind: &'static str,
        path: String,
        attribute: &'static str,
        message: String,
    },
}

impl LoadError {
    /// Creates a new invalid document error.
    pub fn invalid_document(message: impl Into<String>) -> Self {
        Self::InvalidDocument {
            message: message.into(),
        }
    }

    /// Creates a new arity error.
    pub fn arity(kind: &'static str, path: &str, expected: usize, found: usize) -> Self {
        Self::Arity {
            kind,
            path: path.to_string(),
            expected,
            found,
        }
    }

    /// Creates a new missing attribute error.
    pub fn missing_attribute(kind: &'static str, path: &str, attribute: &'static str) -> Self {
        Self::MissingAttribute {
            kind,
            path: path.to_string(),
            attribute,
        }
    }

    /// Creates a new invalid attribute error.
    pub fn invalid_attribute(
        kind: &'static str,
        path: &str,
        attribute: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidAttribute {
            kind,
            path: path.to_string(),
            attribute,
            message: message.into(),
        }
    }
}

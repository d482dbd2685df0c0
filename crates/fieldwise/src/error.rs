use thiserror::Error;

use crate::attributes::AttrKind;

/// Failure to read or write a single attribute.
///
/// Returned by [`Inspect`](crate::attributes::Inspect) implementations. The
/// search engine swallows these; the copy engine wraps them in [`Error`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AttrError {
    #[error("Unknown attribute: {attr}")]
    Unknown { attr: String },

    #[error("Type mismatch on {attr}: expected {expected:?}, found {found:?}")]
    TypeMismatch {
        attr: String,
        expected: AttrKind,
        found: AttrKind,
    },

    #[error("Attribute is read-only: {attr}")]
    ReadOnly { attr: String },

    #[error("Failed to access {attr}: {reason}")]
    Failed { attr: String, reason: String },
}

impl AttrError {
    pub fn unknown(attr: &str) -> Self {
        AttrError::Unknown {
            attr: attr.to_string(),
        }
    }

    pub fn read_only(attr: &str) -> Self {
        AttrError::ReadOnly {
            attr: attr.to_string(),
        }
    }

    pub fn failed(attr: &str, reason: impl Into<String>) -> Self {
        AttrError::Failed {
            attr: attr.to_string(),
            reason: reason.into(),
        }
    }

    /// True when the error only means the two sides disagree on shape.
    ///
    /// The copy engine skips these instead of failing.
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(
            self,
            AttrError::Unknown { .. } | AttrError::TypeMismatch { .. } | AttrError::ReadOnly { .. }
        )
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read {path} on copy source: {source}")]
    SourceRead {
        path: String,
        #[source]
        source: AttrError,
    },

    #[error("Failed to write {path} on copy target: {source}")]
    TargetWrite {
        path: String,
        #[source]
        source: AttrError,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

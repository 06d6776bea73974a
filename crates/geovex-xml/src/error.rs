//! Error types for GVX document assembly and serialization

use std::fmt;
use thiserror::Error;

/// Result type for GVX operations
pub type Result<T> = std::result::Result<T, GvxError>;

/// The value kind a validated field is expected to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Signed or unsigned whole number
    Integer,
    /// Floating-point number
    Real,
    /// Canonical timestamp `YYYY-MM-DDThh:mm:ss.ss`
    DateTime,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Integer => write!(f, "integer"),
            ValueKind::Real => write!(f, "real"),
            ValueKind::DateTime => {
                write!(f, "datetime in format YYYY-MM-DDThh:mm:ss.ss")
            }
        }
    }
}

/// Errors that can occur while assembling or writing a GVX document
#[derive(Debug, Error)]
pub enum GvxError {
    /// A field value failed its integer/real/datetime format check
    #[error("invalid value for {field}: expected {expected}")]
    Validation {
        field: &'static str,
        expected: ValueKind,
    },

    /// A singleton section was added a second time
    #[error("{0} already assigned, only one allowed per document")]
    DuplicateSection(&'static str),

    /// A mandatory parameter was not supplied
    #[error("missing required field {0}")]
    MissingField(&'static str),

    /// XML rendering error
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Rendered bytes were not valid UTF-8
    #[error("invalid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// I/O error while writing the document
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GvxError {
    /// Creates a validation error for the given field.
    pub fn validation(field: &'static str, expected: ValueKind) -> Self {
        Self::Validation { field, expected }
    }
}

//! Binding generator error types.

use std::fmt;

/// Which lookup table a type resolution went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypePosition {
    Return,
    Argument,
}

impl fmt::Display for TypePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Return => write!(f, "return"),
            Self::Argument => write!(f, "argument"),
        }
    }
}

/// Errors that can occur while generating bindings.
#[derive(Debug, thiserror::Error)]
pub enum BindgenError {
    /// A C type has no entry in the return or argument table. Aborts the run.
    #[error(
        "unhandled C {position} type conversion for '{c_type}'. \
         Please update the {position} type table. Declaration: {record}"
    )]
    UnmappedType {
        position: TypePosition,
        c_type: String,
        record: String,
    },

    /// A function or argument carries none of the three type slots.
    #[error("declaration '{spelling}' has no C type: {record}")]
    MissingType { spelling: String, record: String },

    /// The parser dump could not be interpreted.
    #[error("invalid declarations: {detail}")]
    InvalidDeclarations { detail: String },

    /// Configuration file is inconsistent.
    #[error("invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for binding generation.
pub type Result<T> = std::result::Result<T, BindgenError>;

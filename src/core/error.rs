// SPDX-FileCopyrightText: 2026 FsdConv Contributors
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for fsdconv.
//!
//! Provides error types for conversion operations:
//! - String table lookup
//! - Tree decoding
//! - Loader input parsing and registry resolution
//! - File I/O around the batch driver

use std::fmt;

/// Errors that can occur during conversion operations.
///
/// The decoder never recovers from any of these internally; an error aborts
/// the artifact being decoded and propagates to the caller. Tolerating
/// per-artifact failures is the batch driver's job, not the core's.
#[derive(Debug, Clone)]
pub enum FsdError {
    /// String table lookup outside `[0, len)`
    StringIdOutOfRange {
        /// Identifier that was looked up
        id: i64,
        /// Number of records in the table
        len: usize,
    },

    /// A native shape outside the recognized set reached the decoder
    UnsupportedShape {
        /// Native type tag reported by the loader
        type_tag: String,
    },

    /// A non-finite float cannot be represented in the JSON tree
    UnrepresentableFloat {
        /// The offending value
        value: f64,
    },

    /// Loader or string-table input was not in the expected form
    Parse {
        /// What was being parsed
        context: String,
        /// Error message
        message: String,
    },

    /// No loader registered for a file extension
    UnknownLoader {
        /// Extension that failed to resolve
        extension: String,
    },

    /// I/O failure
    Io {
        /// Error message
        message: String,
    },

    /// Other error
    Other(String),
}

impl FsdError {
    /// Create an out-of-range string identifier error.
    pub fn string_id_out_of_range(id: i64, len: usize) -> Self {
        FsdError::StringIdOutOfRange { id, len }
    }

    /// Create an unsupported shape error.
    pub fn unsupported_shape(type_tag: impl Into<String>) -> Self {
        FsdError::UnsupportedShape {
            type_tag: type_tag.into(),
        }
    }

    /// Create an unrepresentable float error.
    pub fn unrepresentable_float(value: f64) -> Self {
        FsdError::UnrepresentableFloat { value }
    }

    /// Create a parse error.
    pub fn parse(context: impl Into<String>, message: impl Into<String>) -> Self {
        FsdError::Parse {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Create an "unknown loader" error.
    pub fn unknown_loader(extension: impl Into<String>) -> Self {
        FsdError::UnknownLoader {
            extension: extension.into(),
        }
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            FsdError::StringIdOutOfRange { id, len } => {
                vec![("id", id.to_string()), ("len", len.to_string())]
            }
            FsdError::UnsupportedShape { type_tag } => vec![("type_tag", type_tag.clone())],
            FsdError::UnrepresentableFloat { value } => vec![("value", value.to_string())],
            FsdError::Parse { context, message } => {
                vec![("context", context.clone()), ("message", message.clone())]
            }
            FsdError::UnknownLoader { extension } => vec![("extension", extension.clone())],
            FsdError::Io { message } => vec![("message", message.clone())],
            FsdError::Other(msg) => vec![("message", msg.clone())],
        }
    }
}

impl fmt::Display for FsdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FsdError::StringIdOutOfRange { id, len } => {
                write!(
                    f,
                    "String identifier {id} outside table range [0, {len})"
                )
            }
            FsdError::UnsupportedShape { type_tag } => {
                write!(f, "Unsupported native shape: '{type_tag}'")
            }
            FsdError::UnrepresentableFloat { value } => {
                write!(f, "Float {value} is not representable as a JSON number")
            }
            FsdError::Parse { context, message } => {
                write!(f, "Parse error in {context}: {message}")
            }
            FsdError::UnknownLoader { extension } => {
                write!(f, "No loader registered for extension '{extension}'")
            }
            FsdError::Io { message } => write!(f, "I/O error: {message}"),
            FsdError::Other(msg) => write!(f, "Other error: {msg}"),
        }
    }
}

impl std::error::Error for FsdError {}

impl From<std::io::Error> for FsdError {
    fn from(err: std::io::Error) -> Self {
        FsdError::Io {
            message: err.to_string(),
        }
    }
}

/// Result type for fsdconv operations.
pub type Result<T> = std::result::Result<T, FsdError>;

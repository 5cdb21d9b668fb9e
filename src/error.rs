//! Unified error types for chatlens.
//!
//! This module provides a single [`ChatlensError`] enum covering every failure
//! the crate can surface.
//!
//! # Error Handling Philosophy
//!
//! Parsing and analysis never fail on transcript *content*: malformed lines are
//! absorbed as continuations or dropped. Errors only come from the edges of the
//! pipeline:
//!
//! - **Decoding** the uploaded bytes into text ([`ChatlensError::Utf8`])
//! - **Reading/writing** files ([`ChatlensError::Io`])
//! - **Configuration** mistakes such as a bad filter date
//! - **Serialization** of the analytics result

use std::io;

use serde::Serialize;
use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::Message;
///
/// fn load() -> Result<Vec<Message>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The transcript file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The transcript bytes are not valid UTF-8.
    ///
    /// Raised by the caller before the parser ever sees any text.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Invalid date format in filter configuration.
    ///
    /// Date filters expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// An output format name or file extension was not recognised.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// What was being resolved (e.g. "output")
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<std::string::FromUtf8Error> for ChatlensError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatlensError::utf8("input", err)
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatlensError {
    /// Creates a UTF-8 decoding error with context.
    pub fn utf8(context: impl Into<String>, source: std::string::FromUtf8Error) -> Self {
        ChatlensError::Utf8 {
            context: context.into(),
            source,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatlensError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatlensError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    /// Returns `true` if this is a UTF-8 decoding error.
    pub fn is_utf8(&self) -> bool {
        matches!(self, ChatlensError::Utf8 { .. })
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatlensError::InvalidDate { .. })
    }

    /// Returns `true` if the error was caused by the caller's input
    /// (bad bytes, bad dates, unknown formats) rather than the environment.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ChatlensError::Utf8 { .. }
                | ChatlensError::InvalidDate { .. }
                | ChatlensError::InvalidFormat { .. }
        )
    }
}

/// Failure envelope reported to clients: `{ "success": false, "detail": "..." }`.
///
/// Mirrors the success envelope produced by
/// [`to_json`](crate::core::output::to_json).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    /// Always `false`.
    pub success: bool,
    /// Human-readable description of the underlying error.
    pub detail: String,
}

impl From<&ChatlensError> for ErrorResponse {
    fn from(err: &ChatlensError) -> Self {
        Self {
            success: false,
            detail: err.to_string(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

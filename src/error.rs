//! Error types for the Net Salary Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The calculation pipeline has exactly one failure mode, an invalid gross
//! salary, which is detected before any arithmetic runs. The remaining
//! variants belong to service configuration loading.

use thiserror::Error;

/// The main error type for the Net Salary Engine.
///
/// # Example
///
/// ```
/// use net_salary_engine::error::EngineError;
///
/// let error = EngineError::InvalidInput {
///     raw: "abc".to_string(),
/// };
/// assert_eq!(error.to_string(), "enter a valid salary greater than zero");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The gross salary was absent, non-numeric, non-finite, zero or negative.
    #[error("enter a valid salary greater than zero")]
    InvalidInput {
        /// The raw value as received, kept for diagnostics.
        raw: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

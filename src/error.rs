//! Error types for the Suggestree library.
//!
//! The autocomplete index itself never fails: empty words and non-positive
//! counts are ignored, and a prefix without matches yields an empty result.
//! Errors come from the layers around it (loading records, reading
//! configuration, validating tree invariants) and are represented by the
//! [`SuggestreeError`] enum.
//!
//! # Examples
//!
//! ```
//! use suggestree::error::{SuggestreeError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SuggestreeError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Suggestree operations.
#[derive(Error, Debug)]
pub enum SuggestreeError {
    /// I/O errors (opening record files, reading stdin, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The tree no longer satisfies ordering, height or balance rules
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    /// Invalid command line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for operations that may fail with SuggestreeError.
pub type Result<T> = std::result::Result<T, SuggestreeError>;

impl SuggestreeError {
    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        SuggestreeError::InvalidConfig(msg.into())
    }

    /// Create a new invariant violation error.
    pub fn invariant<S: Into<String>>(msg: S) -> Self {
        SuggestreeError::InvariantViolation(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SuggestreeError::InvalidArgument(msg.into())
    }
}

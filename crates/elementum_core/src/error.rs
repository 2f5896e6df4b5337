//! Error types for elementum_core.
//!
//! Provides structured error handling for engine construction and rule
//! parsing. All fallible operations in this crate return [`Result`].

use thiserror::Error;

/// Main error type for elementum_core operations.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Grid dimensions too small for the transition pass to do any work
    #[error("degenerate grid dimensions: {rows}x{cols} (need rows >= 2, cols >= 3)")]
    DegenerateGrid { rows: usize, cols: usize },

    /// Rule input text that does not parse as an integer
    #[error("invalid rule input: {0:?}")]
    InvalidRuleInput(String),

    /// Binary-digit string containing non-binary characters or overflowing u32
    #[error("invalid binary string: {0:?}")]
    InvalidBinary(String),
}

/// Result type alias for elementum_core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

impl CoreError {
    /// Creates a new invalid-rule-input error.
    #[must_use]
    pub fn invalid_rule_input<S: Into<String>>(input: S) -> Self {
        Self::InvalidRuleInput(input.into())
    }

    /// Creates a new invalid-binary error.
    #[must_use]
    pub fn invalid_binary<S: Into<String>>(input: S) -> Self {
        Self::InvalidBinary(input.into())
    }
}

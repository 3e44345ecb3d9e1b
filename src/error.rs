// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.

/// Application error type shared by the dispatcher, calculators and reporter.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Unknown activity type: {0}")]
    UnknownActivityType(String),

    #[error("Wrong number of values for {tag}: expected {expected}, got {actual}")]
    ArityMismatch {
        tag: String,
        expected: usize,
        actual: usize,
    },

    #[error("Operation not implemented for base training: {0}")]
    UnimplementedOperation(&'static str),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to read packages: {0}")]
    Io(String),

    #[error("Failed to parse packages: {0}")]
    Parse(String),

    #[error("Failed to serialize summary: {0}")]
    Serialization(String),
}

impl AppError {
    /// True when fewer values were supplied than the variant declares.
    pub fn is_missing_arguments(&self) -> bool {
        matches!(self, AppError::ArityMismatch { expected, actual, .. } if actual < expected)
    }

    /// True when more values were supplied than the variant declares.
    pub fn is_extra_arguments(&self) -> bool {
        matches!(self, AppError::ArityMismatch { expected, actual, .. } if actual > expected)
    }
}

/// Result type alias for workout operations
pub type Result<T> = std::result::Result<T, AppError>;

// Copyright 2025 Cowboy AI, LLC.

//! Error types for domain operations

use thiserror::Error;

/// Raised when an entity's invariants are violated
///
/// There is exactly one error kind in this crate. Each variant names the rule
/// that failed and the field it failed on; the `Display` output is the
/// human-readable message callers surface to users.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntityValidationError {
    /// Value was absent, empty, or whitespace-only
    #[error("{field} should not be empty or null.")]
    EmptyOrNull {
        /// Offending field
        field: &'static str,
    },

    /// Value was absent
    #[error("{field} should not be null.")]
    Null {
        /// Offending field
        field: &'static str,
    },

    /// Value was shorter than the allowed minimum
    #[error("{field} should be at least {min} characters long.")]
    TooShort {
        /// Offending field
        field: &'static str,
        /// Minimum length in characters
        min: usize,
    },

    /// Value was longer than the allowed maximum
    #[error("{field} should be less than {max} characters long.")]
    TooLong {
        /// Offending field
        field: &'static str,
        /// Maximum length in characters
        max: usize,
    },
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, EntityValidationError>;

impl EntityValidationError {
    /// Name of the field that failed validation
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyOrNull { field }
            | Self::Null { field }
            | Self::TooShort { field, .. }
            | Self::TooLong { field, .. } => field,
        }
    }

    /// Check if the value was missing rather than malformed
    pub fn is_missing_value(&self) -> bool {
        matches!(self, Self::EmptyOrNull { .. } | Self::Null { .. })
    }

    /// Check if this is a length violation
    pub fn is_length_violation(&self) -> bool {
        matches!(self, Self::TooShort { .. } | Self::TooLong { .. })
    }
}

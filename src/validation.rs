// Copyright 2025 Cowboy AI, LLC.

//! Field-level validation rules shared by aggregates
//!
//! Each check takes the field name so the resulting
//! [`EntityValidationError`] reads naturally, e.g.
//! `"Name should be at least 3 characters long."`.
//!
//! Lengths are measured in UTF-16 code units, so a character outside the
//! Basic Multilingual Plane (most emoji) counts as two.

use crate::errors::{DomainResult, EntityValidationError};

/// Length of `value` in UTF-16 code units
pub fn text_length(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Fail when the value is absent
pub fn not_null<T: ?Sized>(value: Option<&T>, field: &'static str) -> DomainResult<()> {
    match value {
        Some(_) => Ok(()),
        None => Err(EntityValidationError::Null { field }),
    }
}

/// Fail when the value is absent, empty, or only whitespace
pub fn not_null_or_empty(value: Option<&str>, field: &'static str) -> DomainResult<()> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(()),
        _ => Err(EntityValidationError::EmptyOrNull { field }),
    }
}

/// Fail when the value is shorter than `min` code units
pub fn min_length(value: &str, min: usize, field: &'static str) -> DomainResult<()> {
    if text_length(value) < min {
        return Err(EntityValidationError::TooShort { field, min });
    }
    Ok(())
}

/// Fail when the value is longer than `max` code units
pub fn max_length(value: &str, max: usize, field: &'static str) -> DomainResult<()> {
    if text_length(value) > max {
        return Err(EntityValidationError::TooLong { field, max });
    }
    Ok(())
}

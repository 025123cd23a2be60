// Copyright 2025 Cowboy AI, LLC.

//! Fixture builders for category tests
//!
//! Compiled for this crate's unit tests, and for downstream crates through the
//! `test-utils` feature.

use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::category::{Category, NAME_MAX_LENGTH, NAME_MIN_LENGTH};

fn random_text(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// A name within the accepted length range
pub fn valid_name() -> String {
    let len = rand::thread_rng().gen_range(NAME_MIN_LENGTH..=NAME_MAX_LENGTH.min(64));
    random_text(len)
}

/// A non-empty description within the accepted length range
pub fn valid_description() -> String {
    let len = rand::thread_rng().gen_range(1..=512);
    random_text(len)
}

/// A random active flag
pub fn random_active_flag() -> bool {
    rand::thread_rng().gen_bool(0.5)
}

/// A name of exactly `len` characters
pub fn name_of_length(len: usize) -> String {
    "n".repeat(len)
}

/// A description of exactly `len` characters
pub fn description_of_length(len: usize) -> String {
    "d".repeat(len)
}

/// A freshly constructed, valid, active category
pub fn valid_category() -> Category {
    Category::new(valid_name(), valid_description())
        .expect("fixture data violated category rules")
}

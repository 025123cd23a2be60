// Copyright 2025 Cowboy AI, LLC.

//! # Catalog Domain
//!
//! Domain model for a media catalog, built from Domain-Driven Design building
//! blocks:
//! - **Entity**: typed identity ([`EntityId`]) and the [`DomainEntity`] /
//!   [`AggregateRoot`] seams
//! - **Validation**: field rules producing a single error kind,
//!   [`EntityValidationError`]
//! - **Category**: the catalog grouping aggregate, validated on every
//!   construction and mutation
//!
//! Nothing here persists, queries, or performs I/O. Logging goes through
//! `tracing`; installing a subscriber is left to the application.

#![warn(missing_docs)]

mod category;
mod entity;
mod errors;
pub mod validation;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use category::{
    Category, CategoryId, CategoryUpdate, NewCategory, DESCRIPTION_MAX_LENGTH, NAME_MAX_LENGTH,
    NAME_MIN_LENGTH,
};
pub use entity::{AggregateRoot, CategoryMarker, DomainEntity, EntityId};
pub use errors::{DomainResult, EntityValidationError};

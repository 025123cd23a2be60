// Copyright 2025 Cowboy AI, LLC.

//! Category aggregate
//!
//! A catalog grouping with a name, a description, an active flag and a
//! creation timestamp. Every construction and mutation re-runs the same rule
//! set, in this order, stopping at the first failure:
//!
//! 1. name is present and not blank
//! 2. name has at least [`NAME_MIN_LENGTH`] characters
//! 3. name has at most [`NAME_MAX_LENGTH`] characters
//! 4. description is present
//! 5. description has at most [`DESCRIPTION_MAX_LENGTH`] characters
//!
//! Lengths are UTF-16 code units (see [`crate::validation::text_length`]).

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entity::{AggregateRoot, CategoryMarker, DomainEntity, EntityId};
use crate::errors::{DomainResult, EntityValidationError};
use crate::validation::{max_length, min_length, not_null, not_null_or_empty};

/// Shortest accepted name, in UTF-16 code units
pub const NAME_MIN_LENGTH: usize = 3;

/// Longest accepted name, in UTF-16 code units
pub const NAME_MAX_LENGTH: usize = 255;

/// Longest accepted description, in UTF-16 code units
pub const DESCRIPTION_MAX_LENGTH: usize = 10_000;

const NAME_FIELD: &str = "Name";
const DESCRIPTION_FIELD: &str = "Description";

/// Category identifier
pub type CategoryId = EntityId<CategoryMarker>;

/// A validated catalog category
///
/// Fields are private; `id` and `created_at` never change after construction.
///
/// # Examples
///
/// ```rust
/// use catalog_domain::{Category, CategoryUpdate};
///
/// let mut category = Category::new("Category Name", "Category Description")?;
/// assert!(category.is_active());
///
/// category.update(CategoryUpdate::default().with_name("Renamed"))?;
/// assert_eq!(category.name(), "Renamed");
/// assert_eq!(category.description(), "Category Description");
///
/// category.deactivate()?;
/// assert!(!category.is_active());
/// # Ok::<(), catalog_domain::EntityValidationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    id: CategoryId,
    name: String,
    description: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl Category {
    /// Create an active category
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> DomainResult<Self> {
        Self::with_status(name, description, true)
    }

    /// Create a category with an explicit active flag
    pub fn with_status(
        name: impl Into<String>,
        description: impl Into<String>,
        is_active: bool,
    ) -> DomainResult<Self> {
        let category = Self::assemble(name.into(), description.into(), is_active);
        category.validate()?;

        debug!(category_id = %category.id, is_active, "Category created");
        Ok(category)
    }

    fn assemble(name: String, description: String, is_active: bool) -> Self {
        Self {
            id: CategoryId::new(),
            name,
            description,
            is_active,
            created_at: Utc::now(),
        }
    }

    /// Category ID
    pub fn id(&self) -> CategoryId {
        self.id
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-form description, possibly empty
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether the category is active
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// When the category was created
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Replace the name and/or description
    ///
    /// Fields left as `None` keep their current value. New values are
    /// assigned before validation runs, so on error the category holds the
    /// rejected values; rebuild it if that is not acceptable.
    pub fn update(&mut self, changes: CategoryUpdate) -> DomainResult<()> {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }

        if let Err(err) = self.validate() {
            debug!(category_id = %self.id, error = %err, "Category update rejected");
            return Err(err);
        }

        debug!(category_id = %self.id, "Category updated");
        Ok(())
    }

    /// Mark the category active
    pub fn activate(&mut self) -> DomainResult<()> {
        self.is_active = true;
        self.validate()?;
        debug!(category_id = %self.id, "Category activated");
        Ok(())
    }

    /// Mark the category inactive
    pub fn deactivate(&mut self) -> DomainResult<()> {
        self.is_active = false;
        self.validate()?;
        debug!(category_id = %self.id, "Category deactivated");
        Ok(())
    }

    fn validate(&self) -> DomainResult<()> {
        validate_fields(Some(self.name.as_str()), Some(self.description.as_str()))
    }
}

fn validate_fields(name: Option<&str>, description: Option<&str>) -> DomainResult<()> {
    not_null_or_empty(name, NAME_FIELD)?;
    let name = name.unwrap_or_default();
    min_length(name, NAME_MIN_LENGTH, NAME_FIELD)?;
    max_length(name, NAME_MAX_LENGTH, NAME_FIELD)?;

    not_null(description, DESCRIPTION_FIELD)?;
    max_length(
        description.unwrap_or_default(),
        DESCRIPTION_MAX_LENGTH,
        DESCRIPTION_FIELD,
    )
}

impl DomainEntity for Category {
    type IdType = CategoryMarker;

    fn id(&self) -> CategoryId {
        self.id
    }
}

impl AggregateRoot for Category {}

/// Input for creating a category from an untrusted boundary
///
/// Absent fields (or JSON `null`) are reported by the usual validation
/// messages; a missing `is_active` means active.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct NewCategory {
    /// Display name
    pub name: Option<String>,
    /// Free-form description
    pub description: Option<String>,
    /// Initial active flag, defaults to `true`
    pub is_active: Option<bool>,
}

impl TryFrom<NewCategory> for Category {
    type Error = EntityValidationError;

    fn try_from(input: NewCategory) -> Result<Self, Self::Error> {
        validate_fields(input.name.as_deref(), input.description.as_deref())?;
        let category = Self::assemble(
            input.name.unwrap_or_default(),
            input.description.unwrap_or_default(),
            input.is_active.unwrap_or(true),
        );

        debug!(category_id = %category.id, is_active = category.is_active, "Category created");
        Ok(category)
    }
}

/// Partial update for [`Category::update`]
///
/// `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CategoryUpdate {
    /// Replacement name
    pub name: Option<String>,
    /// Replacement description
    pub description: Option<String>,
}

impl CategoryUpdate {
    /// Set the replacement name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the replacement description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// True when the update would change nothing
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

// Copyright 2025 Cowboy AI, LLC.

//! Entity identity and the aggregate root seam

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;
use uuid::Uuid;

/// A typed entity ID using phantom types for type safety
///
/// IDs are random UUIDs and never nil. The phantom parameter keeps IDs of
/// different entity types from being mixed up at compile time.
///
/// # Examples
///
/// ```rust
/// use catalog_domain::{CategoryMarker, EntityId};
///
/// let a = EntityId::<CategoryMarker>::new();
/// let b = EntityId::<CategoryMarker>::new();
/// assert_ne!(a, b);
/// assert!(!a.as_uuid().is_nil());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId<T> {
    id: Uuid,
    _phantom: PhantomData<T>,
}

impl<T> EntityId<T> {
    /// Create a new random entity ID
    pub fn new() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    /// Create an entity ID from a UUID
    pub fn from_uuid(id: Uuid) -> Self {
        Self {
            id,
            _phantom: PhantomData,
        }
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.id
    }
}

impl<T> Default for EntityId<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Display for EntityId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl<T> From<EntityId<T>> for Uuid {
    fn from(id: EntityId<T>) -> Self {
        id.id
    }
}

impl<T> Serialize for EntityId<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.id.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for EntityId<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Uuid::deserialize(deserializer).map(Self::from_uuid)
    }
}

/// Trait for domain entities with identity
pub trait DomainEntity: Sized {
    /// The marker type for this entity
    type IdType;

    /// Get the entity's ID
    fn id(&self) -> EntityId<Self::IdType>;
}

/// Marker trait for aggregate roots
///
/// Aggregate roots are the entry points for modifying aggregates and own
/// their invariants: every mutation goes through the root, which re-checks
/// them before returning.
pub trait AggregateRoot: DomainEntity {}

/// Marker for category entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryMarker;

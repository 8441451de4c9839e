//! Uniqueness and existence checks shared by the service facades.
//!
//! Checks run against the collection as it is at call time. The facades hold
//! a per-type write lock around check-then-write, and the stores enforce the
//! same unique keys, reported back as [`UniqueViolation`].

use crate::entity::Entity;
use crate::repository::UniqueViolation;
use crate::{CoreError, CoreResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteTarget {
    Insert,
    Update(i32),
}

impl WriteTarget {
    /// An existing holder of a unique value conflicts unless it is the row
    /// being updated.
    fn conflicts_with(&self, holder_id: i32) -> bool {
        match self {
            WriteTarget::Insert => true,
            WriteTarget::Update(id) => *id != holder_id,
        }
    }
}

pub fn ensure_unique<T: Entity>(target: WriteTarget, value: &str, holder: Option<&T>) -> CoreResult<()> {
    match holder {
        Some(existing) if target.conflicts_with(existing.id()) => Err(already_exists::<T>(value)),
        _ => Ok(()),
    }
}

pub fn require<T: Entity>(found: Option<T>, key: impl ToString) -> CoreResult<T> {
    found.ok_or_else(|| CoreError::not_found(T::KIND, key))
}

pub fn already_exists<T: Entity>(value: &str) -> CoreError {
    CoreError::AlreadyExists {
        entity: T::KIND,
        field: T::UNIQUE_FIELD.to_string(),
        value: value.to_string(),
    }
}

/// Translates a store failure, surfacing unique-key violations as conflicts.
pub fn store_error<T: Entity>(err: Box<dyn std::error::Error + Send + Sync>, value: &str) -> CoreError {
    if err.downcast_ref::<UniqueViolation>().is_some() {
        return already_exists::<T>(value);
    }
    CoreError::Storage(err.to_string())
}

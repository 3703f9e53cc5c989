//! Character store port - Interface for roster persistence
//!
//! The store is an opaque key/value document store keyed by a user
//! identifier; the roster is always read and written wholesale. The roster
//! service depends on this trait, not on a concrete adapter.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::entities::CharacterSheet;

/// Port for wholesale roster persistence.
#[async_trait]
pub trait CharacterStorePort: Send + Sync {
    /// Fetch the stored roster. Absent document fields map to an empty list;
    /// transport and decode failures are errors.
    async fn fetch(&self) -> Result<Vec<CharacterSheet>>;

    /// Overwrite the stored roster with the given characters.
    async fn store(&self, characters: &[CharacterSheet]) -> Result<()>;
}

//! Roster service - owns the character roster and its persistence round trip
//!
//! The roster is loaded wholesale from the character store, mutated locally
//! through the active sheet, and written back wholesale on an explicit save.
//! Exclusive (`&mut self`) access serializes the persistence calls: there is
//! never more than one in-flight load or save per roster.

use std::sync::Arc;

use crate::application::ports::outbound::CharacterStorePort;
use crate::domain::entities::CharacterSheet;
use crate::domain::EngineError;

/// What the roster is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterMode {
    /// No characters loaded.
    Empty,
    /// Viewing (and editing) the character at this index.
    Viewing(usize),
    /// A freshly appended character at the tail is pending; `restore` is the
    /// index to return to if the creation is cancelled.
    Creating { restore: Option<usize> },
}

/// Coordinates the roster, the active selection, and the store round trip.
pub struct RosterService<S: CharacterStorePort> {
    store: Arc<S>,
    characters: Vec<CharacterSheet>,
    mode: RosterMode,
}

impl<S: CharacterStorePort> RosterService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            characters: Vec::new(),
            mode: RosterMode::Empty,
        }
    }

    pub fn characters(&self) -> &[CharacterSheet] {
        &self.characters
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn mode(&self) -> RosterMode {
        self.mode
    }

    /// Index of the active character, if any. While creating, the pending
    /// character at the tail is active.
    pub fn active_index(&self) -> Option<usize> {
        match self.mode {
            RosterMode::Empty => None,
            RosterMode::Viewing(index) => Some(index),
            RosterMode::Creating { .. } => self.characters.len().checked_sub(1),
        }
    }

    pub fn active(&self) -> Option<&CharacterSheet> {
        self.active_index().map(|index| &self.characters[index])
    }

    /// Mutable access to the active sheet; all edits go through here.
    pub fn active_mut(&mut self) -> Option<&mut CharacterSheet> {
        let index = self.active_index()?;
        Some(&mut self.characters[index])
    }

    /// Replace the in-memory roster with the stored one.
    ///
    /// A missing or malformed payload degrades to an empty roster; transport
    /// failures likewise. Neither is surfaced as an error.
    pub async fn load(&mut self) {
        let characters = match self.store.fetch().await {
            Ok(characters) => characters,
            Err(e) => {
                tracing::warn!("Failed to load roster, starting empty: {:#}", e);
                Vec::new()
            }
        };
        tracing::debug!("Loaded roster with {} characters", characters.len());
        self.characters = characters;
        self.mode = if self.characters.is_empty() {
            RosterMode::Empty
        } else {
            RosterMode::Viewing(0)
        };
    }

    /// Switch the active character.
    ///
    /// Rejected while a creation is pending; the index must be in range.
    pub fn select(&mut self, index: usize) -> Result<(), EngineError> {
        if matches!(self.mode, RosterMode::Creating { .. }) {
            return Err(EngineError::CreationInProgress);
        }
        if index >= self.characters.len() {
            return Err(EngineError::IndexOutOfRange {
                index,
                len: self.characters.len(),
            });
        }
        self.mode = RosterMode::Viewing(index);
        Ok(())
    }

    /// Append an all-default character and make it active.
    ///
    /// At most one creation may be in flight; a second request is rejected
    /// and leaves the roster unchanged.
    pub fn begin_create(&mut self) -> Result<usize, EngineError> {
        let restore = match self.mode {
            RosterMode::Creating { .. } => return Err(EngineError::CreationInProgress),
            RosterMode::Viewing(index) => Some(index),
            RosterMode::Empty => None,
        };
        self.characters.push(CharacterSheet::new());
        self.mode = RosterMode::Creating { restore };
        Ok(self.characters.len() - 1)
    }

    /// Discard the pending character and restore the previous selection.
    pub fn cancel_create(&mut self) -> Result<(), EngineError> {
        let RosterMode::Creating { restore } = self.mode else {
            return Err(EngineError::NoCreationInProgress);
        };
        self.characters.pop();
        self.mode = match restore {
            Some(index) => RosterMode::Viewing(index),
            None => RosterMode::Empty,
        };
        Ok(())
    }

    /// Write the full roster to the store.
    ///
    /// On success a pending creation is committed. On failure the write is
    /// not retried and the in-memory roster is left as-is; the return value
    /// is the only failure indicator.
    pub async fn save(&mut self) -> bool {
        if let Err(e) = self.store.store(&self.characters).await {
            tracing::error!("Failed to save roster: {:#}", e);
            return false;
        }
        tracing::debug!("Saved roster with {} characters", self.characters.len());
        if matches!(self.mode, RosterMode::Creating { .. }) {
            self.mode = match self.characters.len().checked_sub(1) {
                Some(tail) => RosterMode::Viewing(tail),
                None => RosterMode::Empty,
            };
        }
        true
    }
}

//! Wire format of the remote character store
//!
//! Retrieval returns `{ "body": { "characters": [...] } }`; storing posts
//! `{ "characters": [...] }` (always the full roster, never a delta). A
//! missing `body` or `characters` field means "empty roster", not an error.

use serde::{Deserialize, Serialize};

use crate::domain::entities::CharacterSheet;

/// The roster document as stored: the full character list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterDocument {
    #[serde(default)]
    pub characters: Vec<CharacterSheet>,
}

/// Envelope wrapped around the document on retrieval.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreEnvelope {
    #[serde(default)]
    pub body: Option<RosterDocument>,
}

impl StoreEnvelope {
    /// Unwrap to the character list, treating absent fields as empty.
    pub fn into_characters(self) -> Vec<CharacterSheet> {
        self.body.map(|doc| doc.characters).unwrap_or_default()
    }
}

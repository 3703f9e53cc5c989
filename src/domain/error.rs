//! Engine error taxonomy
//!
//! Budget violations are deliberately NOT errors: the ledgers report them as
//! an [`AdjustOutcome`](crate::domain::value_objects::AdjustOutcome) with the
//! state unchanged. The variants here cover operation-state and contract
//! violations that callers must handle explicitly.

use thiserror::Error;

/// Errors raised by roster coordination and check resolution.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// A character creation is already in flight; at most one at a time.
    #[error("a character creation is already in progress")]
    CreationInProgress,

    /// `cancel_create` called while no creation is in flight.
    #[error("no character creation is in progress")]
    NoCreationInProgress,

    /// Selection index outside the current roster.
    #[error("character index {index} out of range (roster has {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Party check or selection against an empty roster.
    #[error("operation requires a non-empty roster")]
    EmptyRoster,

    /// Skill name not present in the skill table.
    #[error("unknown skill: {0}")]
    UnknownSkill(String),
}

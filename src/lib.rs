//! Sheetforge - Character sheet rules engine
//!
//! The engine backs a browser-based character sheet editor:
//! - Tracks a roster of characters with attributes, derived modifiers,
//!   achieved classes, skill points, and derived skill totals
//! - Enforces the attribute and skill point budgets
//! - Resolves d20 skill checks for one character or the best of the party
//! - Persists the roster wholesale through a remote HTTP character store
//!
//! The crate is embedded by a UI host; there is no server or CLI surface.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::services::{CheckResolver, RosterService};
pub use domain::entities::CharacterSheet;
pub use domain::value_objects::{
    AdjustOutcome, Attribute, CheckResult, ClassProfile, RollOutcome,
};
pub use domain::EngineError;

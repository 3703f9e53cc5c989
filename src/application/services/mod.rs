//! Application services - Use case implementations
//!
//! - [`RosterService`]: owns the roster, the active selection, and the
//!   load/save round trip against the character store
//! - [`CheckResolver`]: draws d20 rolls for individual and party skill checks

pub mod check_service;
pub mod roster_service;

pub use check_service::{CheckResolver, PartyRollOutcome};
pub use roster_service::{RosterMode, RosterService};

//! Data Transfer Objects - For the character store wire format
//!
//! DTOs live in the application layer so infrastructure adapters can
//! serialize/deserialize the store envelope without shaping the domain model
//! around it.

mod roster;

pub use roster::{RosterDocument, StoreEnvelope};

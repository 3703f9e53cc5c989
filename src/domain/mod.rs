//! Domain layer - Rule semantics with no external dependencies
//!
//! This layer contains:
//! - Entities: the character sheet aggregate
//! - Value Objects: attributes, class profiles, skills, check outcomes
//! - Rules: compile-time rule constants (budgets, die size)

pub mod entities;
pub mod error;
pub mod rules;
pub mod value_objects;

pub use error::EngineError;

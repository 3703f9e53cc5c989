//! Infrastructure layer - Adapters for external collaborators

pub mod config;
pub mod store;

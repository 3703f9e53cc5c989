//! Application configuration

use std::env;

use anyhow::{Context, Result};

/// Configuration for the remote character store, loaded from environment.
///
/// Rule constants (point budgets, die size) are compile-time configuration
/// in [`crate::domain::rules`], not part of this struct.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the character store API
    pub store_base_url: String,
    /// User identifier the roster document is keyed by
    pub store_user: String,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            store_base_url: env::var("CHARACTER_STORE_URL").unwrap_or_else(|_| {
                "https://recruiting.verylongdomaintotestwith.ca/api".to_string()
            }),
            store_user: env::var("CHARACTER_STORE_USER")
                .context("CHARACTER_STORE_USER environment variable is required")?,
        })
    }
}

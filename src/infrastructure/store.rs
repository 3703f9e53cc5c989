//! HTTP adapter for the remote character store
//!
//! The store is a document store addressed by user identifier:
//! `GET  {base}/{user}/character` returns `{ "body": { "characters": [...] } }`,
//! `POST {base}/{user}/character` accepts `{ "characters": [...] }`.
//! The roster always travels wholesale in both directions.

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;

use crate::application::dto::{RosterDocument, StoreEnvelope};
use crate::application::ports::outbound::CharacterStorePort;
use crate::domain::entities::CharacterSheet;

/// Client for the character store API
pub struct HttpCharacterStore {
    client: Client,
    base_url: String,
    user: String,
}

impl HttpCharacterStore {
    pub fn new(base_url: &str, user: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            user: user.to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/{}/character", self.base_url, self.user)
    }

    /// Fetch the stored roster document.
    pub async fn fetch_roster(&self) -> Result<Vec<CharacterSheet>, StoreError> {
        let response = self.client.get(self.endpoint()).send().await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            return Err(StoreError::ApiError(error_text));
        }

        let envelope: StoreEnvelope = response.json().await?;
        Ok(envelope.into_characters())
    }

    /// Overwrite the stored roster document. The response body is accepted
    /// without further validation.
    pub async fn store_roster(&self, characters: &[CharacterSheet]) -> Result<(), StoreError> {
        let document = RosterDocument {
            characters: characters.to_vec(),
        };

        let response = self
            .client
            .post(self.endpoint())
            .json(&document)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            return Err(StoreError::ApiError(error_text));
        }

        Ok(())
    }
}

#[async_trait]
impl CharacterStorePort for HttpCharacterStore {
    async fn fetch(&self) -> Result<Vec<CharacterSheet>> {
        Ok(self.fetch_roster().await?)
    }

    async fn store(&self, characters: &[CharacterSheet]) -> Result<()> {
        Ok(self.store_roster(characters).await?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("API error: {0}")]
    ApiError(String),
}

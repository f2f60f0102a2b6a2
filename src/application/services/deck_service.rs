use crate::application::models::deck::{Deck, DeckPatch, DeckRequest};
use crate::application::models::page::Page;
use crate::application::services::DeckService;
use crate::config::Config;
use crate::error::AppError;
use crate::transport::CardioHttpClient;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

/// Implementation of the deck service
pub struct DeckServiceImpl<T: CardioHttpClient> {
    config: Arc<Config>,
    client: Arc<T>,
}

impl<T: CardioHttpClient> DeckServiceImpl<T> {
    /// Creates a new instance of the deck service
    pub fn new(config: Arc<Config>, client: Arc<T>) -> Self {
        Self { config, client }
    }

    /// Gets the current configuration
    pub fn get_config(&self) -> &Config {
        &self.config
    }
}

#[async_trait]
impl<T: CardioHttpClient + 'static> DeckService for DeckServiceImpl<T> {
    async fn list_decks(&self) -> Result<Page<Deck>, AppError> {
        self.client.get("decks/").await
    }

    async fn get_deck(&self, id: i64) -> Result<Deck, AppError> {
        self.client.get(&format!("decks/{id}/")).await
    }

    async fn create_deck(&self, deck: &DeckRequest) -> Result<Deck, AppError> {
        info!("Creating deck: {}", deck.name);
        self.client.post("decks/", deck).await
    }

    async fn update_deck(&self, id: i64, deck: &DeckRequest) -> Result<Deck, AppError> {
        self.client.put(&format!("decks/{id}/"), deck).await
    }

    async fn patch_deck(&self, id: i64, patch: &DeckPatch) -> Result<Deck, AppError> {
        self.client.patch(&format!("decks/{id}/"), patch).await
    }

    async fn delete_deck(&self, id: i64) -> Result<(), AppError> {
        info!("Deleting deck {}", id);
        self.client.delete(&format!("decks/{id}/")).await
    }
}

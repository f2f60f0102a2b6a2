use crate::application::models::card::{Card, CardRequest, GenerateCardRequest, GeneratedCard};
use crate::application::models::page::Page;
use crate::application::services::CardService;
use crate::config::Config;
use crate::error::AppError;
use crate::transport::CardioHttpClient;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the card service
pub struct CardServiceImpl<T: CardioHttpClient> {
    config: Arc<Config>,
    client: Arc<T>,
}

impl<T: CardioHttpClient> CardServiceImpl<T> {
    /// Creates a new instance of the card service
    pub fn new(config: Arc<Config>, client: Arc<T>) -> Self {
        Self { config, client }
    }

    /// Gets the current configuration
    pub fn get_config(&self) -> &Config {
        &self.config
    }
}

#[async_trait]
impl<T: CardioHttpClient + 'static> CardService for CardServiceImpl<T> {
    async fn list_cards(&self, deck: Option<i64>) -> Result<Page<Card>, AppError> {
        let path = match deck {
            Some(deck) => format!("cards/?deck={deck}"),
            None => "cards/".to_string(),
        };
        debug!("Listing cards: {}", path);
        self.client.get(&path).await
    }

    async fn get_card(&self, id: i64) -> Result<Card, AppError> {
        self.client.get(&format!("cards/{id}/")).await
    }

    async fn create_card(&self, card: &CardRequest) -> Result<Card, AppError> {
        info!("Creating card in deck {}", card.deck);
        self.client.post("cards/", card).await
    }

    async fn update_card(&self, id: i64, card: &CardRequest) -> Result<Card, AppError> {
        self.client.put(&format!("cards/{id}/"), card).await
    }

    async fn delete_card(&self, id: i64) -> Result<(), AppError> {
        info!("Deleting card {}", id);
        self.client.delete(&format!("cards/{id}/")).await
    }

    async fn generate_card(&self, input_text: &str) -> Result<GeneratedCard, AppError> {
        info!("Requesting card generation");
        let body = GenerateCardRequest {
            input_text: input_text.to_string(),
        };
        self.client.post("generate_card/", &body).await
    }
}

use crate::application::models::card_type::{CardType, CardTypeRequest};
use crate::application::services::CardTypeService;
use crate::config::Config;
use crate::error::AppError;
use crate::transport::CardioHttpClient;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

/// Implementation of the card type service
///
/// Create and update validate the designer rules locally before the round
/// trip: every declared field assigned to front, back, or hidden, and at
/// least one preview field.
pub struct CardTypeServiceImpl<T: CardioHttpClient> {
    config: Arc<Config>,
    client: Arc<T>,
}

impl<T: CardioHttpClient> CardTypeServiceImpl<T> {
    /// Creates a new instance of the card type service
    pub fn new(config: Arc<Config>, client: Arc<T>) -> Self {
        Self { config, client }
    }

    /// Gets the current configuration
    pub fn get_config(&self) -> &Config {
        &self.config
    }
}

#[async_trait]
impl<T: CardioHttpClient + 'static> CardTypeService for CardTypeServiceImpl<T> {
    async fn list_card_types(&self) -> Result<Vec<CardType>, AppError> {
        self.client.get("cardtypes/").await
    }

    async fn get_card_type(&self, id: i64) -> Result<CardType, AppError> {
        self.client.get(&format!("cardtypes/{id}/")).await
    }

    async fn create_card_type(&self, card_type: &CardTypeRequest) -> Result<CardType, AppError> {
        card_type.validate()?;
        info!("Creating card type: {}", card_type.name);
        self.client.post("cardtypes/", card_type).await
    }

    async fn update_card_type(
        &self,
        id: i64,
        card_type: &CardTypeRequest,
    ) -> Result<CardType, AppError> {
        card_type.validate()?;
        self.client.put(&format!("cardtypes/{id}/"), card_type).await
    }

    async fn delete_card_type(&self, id: i64) -> Result<(), AppError> {
        info!("Deleting card type {}", id);
        self.client.delete(&format!("cardtypes/{id}/")).await
    }
}

use crate::application::models::card_type::{CardType, CardTypeRequest};
use crate::error::AppError;
use async_trait::async_trait;

/// Service for the card-type designer against `/cardtypes/`
#[async_trait]
pub trait CardTypeService: Send + Sync {
    /// Lists the card types visible to the current user
    async fn list_card_types(&self) -> Result<Vec<CardType>, AppError>;

    /// Fetches a single card type
    async fn get_card_type(&self, id: i64) -> Result<CardType, AppError>;

    /// Creates a card type after validating the designer rules
    async fn create_card_type(&self, card_type: &CardTypeRequest) -> Result<CardType, AppError>;

    /// Updates a card type after validating the designer rules
    async fn update_card_type(
        &self,
        id: i64,
        card_type: &CardTypeRequest,
    ) -> Result<CardType, AppError>;

    /// Deletes a card type
    async fn delete_card_type(&self, id: i64) -> Result<(), AppError>;
}

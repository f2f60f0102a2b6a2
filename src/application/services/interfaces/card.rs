use crate::application::models::card::{Card, CardRequest, GeneratedCard};
use crate::application::models::page::Page;
use crate::error::AppError;
use async_trait::async_trait;

/// Service for card CRUD against `/cards/` and drafts via `/generate_card/`
#[async_trait]
pub trait CardService: Send + Sync {
    /// Lists cards, optionally filtered to one deck via `?deck=`
    async fn list_cards(&self, deck: Option<i64>) -> Result<Page<Card>, AppError>;

    /// Fetches a single card
    async fn get_card(&self, id: i64) -> Result<Card, AppError>;

    /// Creates a card in one of the current user's decks
    async fn create_card(&self, card: &CardRequest) -> Result<Card, AppError>;

    /// Replaces a card's data
    async fn update_card(&self, id: i64, card: &CardRequest) -> Result<Card, AppError>;

    /// Deletes a card
    async fn delete_card(&self, id: i64) -> Result<(), AppError>;

    /// Generates a starter-shaped card draft from free-form text
    async fn generate_card(&self, input_text: &str) -> Result<GeneratedCard, AppError>;
}

use crate::application::models::deck::{Deck, DeckPatch, DeckRequest};
use crate::application::models::page::Page;
use crate::error::AppError;
use async_trait::async_trait;

/// Service for deck CRUD against `/decks/`
#[async_trait]
pub trait DeckService: Send + Sync {
    /// Lists the decks visible to the current user
    async fn list_decks(&self) -> Result<Page<Deck>, AppError>;

    /// Fetches a single deck with its embedded cards
    async fn get_deck(&self, id: i64) -> Result<Deck, AppError>;

    /// Creates a new deck owned by the current user
    async fn create_deck(&self, deck: &DeckRequest) -> Result<Deck, AppError>;

    /// Replaces a deck's attributes
    async fn update_deck(&self, id: i64, deck: &DeckRequest) -> Result<Deck, AppError>;

    /// Partially updates a deck, e.g. toggling the shared flag
    async fn patch_deck(&self, id: i64, patch: &DeckPatch) -> Result<Deck, AppError>;

    /// Deletes a deck and its cards
    async fn delete_deck(&self, id: i64) -> Result<(), AppError>;
}

use crate::application::models::card::Card;
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// A deck of flashcards as returned by `/decks/`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct Deck {
    /// Deck identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Owning username; global starter decks have no owner
    #[serde(default)]
    pub owner: Option<String>,
    /// Whether the deck is visible to all users
    #[serde(default)]
    pub shared: bool,
    /// Comma-separated tag list
    #[serde(default)]
    pub tags: String,
    /// Identifier of the card type governing this deck's cards
    #[serde(default)]
    pub card_type: Option<i64>,
    /// Cards embedded in the deck detail response
    #[serde(default)]
    pub cards: Vec<Card>,
}

/// Write shape for creating or updating a deck
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct DeckRequest {
    /// Display name
    pub name: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Card type governing the deck's cards
    pub card_type: i64,
    /// Whether the deck is visible to all users
    #[serde(default)]
    pub shared: bool,
    /// Comma-separated tag list
    #[serde(default)]
    pub tags: String,
}

/// Partial write shape for PATCHing a single deck attribute
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, Default)]
pub struct DeckPatch {
    /// New display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New shared flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared: Option<bool>,
    /// New tag list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
}

//! Card layout resolution
//!
//! Decides which fields render on a card's front, back, preview, and hidden
//! zones. Card types created by older clients may declare no layout at all,
//! so every zone has a fallback; the classic starter deck keeps its original
//! front/back split even when its stored layout is missing or invalid.

use crate::application::models::card_type::CardType;
use crate::constants::DEFAULT_PREVIEW_FIELD_COUNT;
use serde_json::{Map, Value};

/// The fields of the classic starter deck, in display order
pub const STARTER_FIELDS: [&str; 7] = [
    "problem",
    "difficulty",
    "category",
    "hint",
    "pseudo",
    "solution",
    "complexity",
];

const STARTER_FRONT: [&str; 5] = ["problem", "difficulty", "category", "hint", "pseudo"];
const STARTER_BACK: [&str; 2] = ["solution", "complexity"];

/// Front and back zones after fallback resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLayout {
    /// Fields rendered on the front of the card
    pub front: Vec<String>,
    /// Fields rendered on the back of the card
    pub back: Vec<String>,
}

/// Detects the classic starter deck card type by its fields
///
/// The type must carry all starter fields and nothing else; order does not
/// matter.
#[must_use]
pub fn is_starter_card_type(card_type: &CardType) -> bool {
    card_type.fields.len() == STARTER_FIELDS.len()
        && STARTER_FIELDS
            .iter()
            .all(|f| card_type.fields.iter().any(|cf| cf == f))
}

fn owned(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|f| f.to_string()).collect()
}

/// Fields a card type declares, falling back to the card data's keys when
/// the declaration is missing
fn effective_fields(card_type: &CardType, card_data: &Map<String, Value>) -> Vec<String> {
    if card_type.fields.is_empty() {
        card_data.keys().cloned().collect()
    } else {
        card_type.fields.clone()
    }
}

/// Resolves the front/back layout for a card
///
/// - Starter deck types fall back to the classic split whenever a declared
///   zone is missing or empty.
/// - Custom types use the declared front when non-empty, otherwise all
///   fields land on the front; the back stays empty unless declared.
#[must_use]
pub fn resolve_layout(card_type: &CardType, card_data: &Map<String, Value>) -> ResolvedLayout {
    let layout = &card_type.layout;

    if is_starter_card_type(card_type) {
        let front = if layout.front.is_empty() {
            owned(&STARTER_FRONT)
        } else {
            layout.front.clone()
        };
        let back = if layout.back.is_empty() {
            owned(&STARTER_BACK)
        } else {
            layout.back.clone()
        };
        return ResolvedLayout { front, back };
    }

    let front = if layout.front.is_empty() {
        effective_fields(card_type, card_data)
    } else {
        layout.front.clone()
    };
    let back = layout.back.clone();

    ResolvedLayout { front, back }
}

/// Resolves the fields shown for a card in the deck overview grid
///
/// Uses the declared preview zone when non-empty. Legacy card types without
/// one fall back to `problem`/`difficulty` when both exist, then to the
/// first two fields.
#[must_use]
pub fn preview_fields(card_type: &CardType, card_data: &Map<String, Value>) -> Vec<String> {
    if !card_type.layout.preview.is_empty() {
        return card_type.layout.preview.clone();
    }

    let fields = effective_fields(card_type, card_data);
    if fields.iter().any(|f| f == "problem") && fields.iter().any(|f| f == "difficulty") {
        return vec!["problem".to_string(), "difficulty".to_string()];
    }

    fields
        .into_iter()
        .take(DEFAULT_PREVIEW_FIELD_COUNT)
        .collect()
}

/// Returns the declared fields minus the hidden zone
///
/// Hidden fields never render until the viewer explicitly reveals them.
#[must_use]
pub fn visible_fields(card_type: &CardType, card_data: &Map<String, Value>) -> Vec<String> {
    effective_fields(card_type, card_data)
        .into_iter()
        .filter(|f| !card_type.layout.hidden.iter().any(|h| h == f))
        .collect()
}

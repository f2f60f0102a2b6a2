use crate::error::AppError;
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// Zone assignment of a card type's fields
///
/// Fields land on the card front, the card back, the deck preview grid, or
/// are hidden until the viewer reveals them. A zone missing on the wire
/// deserializes as empty; the resolution rules in
/// [`crate::presentation::layout`] supply the fallbacks.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CardLayout {
    /// Fields rendered on the front of the card
    #[serde(default)]
    pub front: Vec<String>,
    /// Fields rendered on the back of the card
    #[serde(default)]
    pub back: Vec<String>,
    /// Fields shown in the deck overview grid
    #[serde(default)]
    pub preview: Vec<String>,
    /// Fields hidden until explicitly revealed
    #[serde(default)]
    pub hidden: Vec<String>,
}

/// A user-defined card schema as returned by `/cardtypes/`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct CardType {
    /// Card type identifier
    pub id: i64,
    /// Display name, unique per owner
    pub name: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// JSON keys every card of this type must carry in its data
    #[serde(default)]
    pub fields: Vec<String>,
    /// Zone assignment for the fields
    #[serde(default)]
    pub layout: CardLayout,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Owning username, if the API exposes it
    #[serde(default)]
    pub owner: Option<String>,
}

impl CardType {
    /// Checks that a card's data keys match this type's declared fields
    ///
    /// Mirrors the server-side validation: unexpected and missing keys are
    /// both rejected, so client code can fail before the round trip.
    pub fn validate_card_data(&self, data: &Map<String, Value>) -> Result<(), AppError> {
        let allowed: BTreeSet<&str> = self.fields.iter().map(String::as_str).collect();
        let given: BTreeSet<&str> = data.keys().map(String::as_str).collect();

        let extra: Vec<&str> = given.difference(&allowed).copied().collect();
        let missing: Vec<&str> = allowed.difference(&given).copied().collect();

        if extra.is_empty() && missing.is_empty() {
            return Ok(());
        }

        let mut msg = String::new();
        if !extra.is_empty() {
            msg.push_str(&format!("unexpected keys: {extra:?}"));
        }
        if !missing.is_empty() {
            if !msg.is_empty() {
                msg.push_str("; ");
            }
            msg.push_str(&format!("missing keys: {missing:?}"));
        }
        Err(AppError::InvalidInput(msg))
    }
}

/// Write shape for creating or updating a card type
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct CardTypeRequest {
    /// Display name
    pub name: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Declared fields
    pub fields: Vec<String>,
    /// Zone assignment for the declared fields
    pub layout: CardLayout,
}

impl CardTypeRequest {
    /// Validates the designer rules before submission
    ///
    /// Every field must be assigned to front, back, or hidden, and at least
    /// one preview field must be selected.
    pub fn validate(&self) -> Result<(), AppError> {
        let assigned: BTreeSet<&str> = self
            .layout
            .front
            .iter()
            .chain(self.layout.back.iter())
            .chain(self.layout.hidden.iter())
            .map(String::as_str)
            .collect();

        let unassigned: Vec<&str> = self
            .fields
            .iter()
            .map(String::as_str)
            .filter(|f| !assigned.contains(f))
            .collect();

        if !unassigned.is_empty() {
            return Err(AppError::InvalidInput(format!(
                "all fields must be assigned to front, back, or hidden; unassigned: {unassigned:?}"
            )));
        }

        if self.layout.preview.is_empty() {
            return Err(AppError::InvalidInput(
                "select at least one field for deck preview".to_string(),
            ));
        }

        Ok(())
    }
}

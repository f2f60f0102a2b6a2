use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A flashcard as returned by `/cards/`
///
/// Card content lives in `data`, a free-form object whose keys are governed
/// by the deck's card type. The named fields mirror the classic starter-deck
/// keys and are populated by the API for reads only.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct Card {
    /// Card identifier
    pub id: i64,
    /// Identifier of the deck this card belongs to
    pub deck: i64,
    /// Identifier of the governing card type, if the API exposes it
    #[serde(default)]
    pub card_type: Option<i64>,
    /// Field name to value, keys constrained by the card type's fields
    #[serde(default)]
    pub data: Map<String, Value>,
    /// Legacy read-only mirror of `data.problem`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub problem: Option<String>,
    /// Legacy read-only mirror of `data.difficulty`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    /// Legacy read-only mirror of `data.category`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Legacy read-only mirror of `data.hint`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    /// Legacy read-only mirror of `data.pseudo`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pseudo: Option<String>,
    /// Legacy read-only mirror of `data.solution`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
    /// Legacy read-only mirror of `data.complexity`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity: Option<String>,
    /// Legacy read-only mirror of `data.tags`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
}

impl Card {
    /// Returns the value of a field from the card data as a display string
    #[must_use]
    pub fn field(&self, name: &str) -> Option<String> {
        self.data.get(name).map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}

/// Write shape for creating or updating a card
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct CardRequest {
    /// Deck the card belongs to
    pub deck: i64,
    /// Governing card type, if different from the deck's default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_type: Option<i64>,
    /// Field name to value; keys must match the card type's fields
    pub data: Map<String, Value>,
}

/// Body of `POST {base}/generate_card/`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct GenerateCardRequest {
    /// Free-form prompt text describing the card to generate
    pub input_text: String,
}

/// A generated card draft, starter-deck shaped
///
/// The generation endpoint always answers with the classic starter fields;
/// the caller seeds a create-card form from them.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, Default)]
pub struct GeneratedCard {
    /// Problem statement
    #[serde(default)]
    pub problem: String,
    /// Difficulty label
    #[serde(default)]
    pub difficulty: String,
    /// Category label
    #[serde(default)]
    pub category: String,
    /// Hint text
    #[serde(default)]
    pub hint: String,
    /// Pseudocode outline
    #[serde(default)]
    pub pseudo: String,
    /// Worked solution
    #[serde(default)]
    pub solution: String,
    /// Complexity analysis
    #[serde(default)]
    pub complexity: String,
}

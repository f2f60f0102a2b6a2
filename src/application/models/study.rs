use crate::application::models::card::Card;
use crate::application::models::utils::empty_string_as_none;
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Review rating submitted after studying a card
///
/// The server owns the spaced-repetition scheduling; the client only
/// transmits the rating.
#[derive(DebugPretty, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    /// Failed recall, repetition counter resets
    Again,
    /// Recalled with difficulty
    Hard,
    /// Recalled correctly
    Good,
    /// Recalled effortlessly
    Easy,
}

impl FromStr for Rating {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "again" => Ok(Rating::Again),
            "hard" => Ok(Rating::Hard),
            "good" => Ok(Rating::Good),
            "easy" => Ok(Rating::Easy),
            other => Err(format!("unknown rating: {other}")),
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Rating::Again => "again",
            Rating::Hard => "hard",
            Rating::Good => "good",
            Rating::Easy => "easy",
        };
        write!(f, "{s}")
    }
}

/// Study status of a card for the current user
#[derive(DebugPretty, DisplaySimple, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    /// Never studied
    #[default]
    New,
    /// Marked as known
    Known,
    /// Flagged for review
    Review,
}

/// Per-user study state of a card, as returned by `/usercards/`
///
/// The scheduling fields are read-only; the server recomputes them from the
/// submitted rating.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct UserCard {
    /// User-card identifier
    pub id: i64,
    /// The underlying card, embedded
    pub card: Card,
    /// SM-2 ease factor
    pub ease_factor: f64,
    /// Current interval in days
    pub interval: i32,
    /// Consecutive successful repetitions
    pub repetitions: i32,
    /// When the card is next due
    pub due_date: DateTime<Utc>,
    /// Last submitted rating; blank on the wire before the first review
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub last_rating: Option<Rating>,
    /// Study status
    #[serde(default)]
    pub status: ReviewStatus,
}

/// Write shape for submitting a review via `PATCH /usercards/{id}/`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, Default)]
pub struct ReviewUpdate {
    /// The rating for this review
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_rating: Option<Rating>,
    /// Explicit status change, independent of the rating
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ReviewStatus>,
}

impl ReviewUpdate {
    /// A review update carrying only a rating
    #[must_use]
    pub fn rating(rating: Rating) -> Self {
        Self {
            last_rating: Some(rating),
            status: None,
        }
    }

    /// A review update carrying only a status change
    #[must_use]
    pub fn status(status: ReviewStatus) -> Self {
        Self {
            last_rating: None,
            status: Some(status),
        }
    }
}

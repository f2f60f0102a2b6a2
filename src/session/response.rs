use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Response of `POST {base}/token/`: a fresh access/refresh pair
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct TokenPairResponse {
    /// Short-lived bearer token for API requests
    pub access: String,
    /// Longer-lived token exchanged for new access tokens
    pub refresh: String,
}

/// Body of `POST {base}/token/refresh/`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    /// The stored refresh token
    pub refresh: String,
}

/// Response of `POST {base}/token/refresh/`
///
/// The `access` field is optional on the wire; a success status without a
/// usable access token is treated as a failed refresh.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    /// The new access token, when the refresh succeeded
    #[serde(default)]
    pub access: Option<String>,
}

impl RefreshResponse {
    /// Returns the new access token if the response carries a non-empty one
    #[must_use]
    pub fn usable_access(&self) -> Option<&str> {
        self.access.as_deref().filter(|t| !t.is_empty())
    }
}

/// Body of `POST {base}/token/`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Account username
    pub username: String,
    /// Account password
    pub password: String,
}

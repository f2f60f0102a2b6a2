use crate::error::AppError;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Body of `POST {base}/register/`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Desired username
    pub username: String,
    /// Account email address
    pub email: String,
    /// Password, minimum 8 characters
    pub password: String,
    /// Password confirmation, must match `password`
    pub password2: String,
}

impl RegisterRequest {
    /// Client-side checks mirroring the server's register validation
    pub fn validate(&self) -> Result<(), AppError> {
        if self.password != self.password2 {
            return Err(AppError::InvalidInput("passwords must match".to_string()));
        }
        if self.password.len() < 8 {
            return Err(AppError::InvalidInput(
                "password must be at least 8 characters".to_string(),
            ));
        }
        if self.email.is_empty() {
            return Err(AppError::InvalidInput("email is required".to_string()));
        }
        Ok(())
    }
}

/// Response of a successful registration
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct RegisteredUser {
    /// The created username
    pub username: String,
    /// The registered email address
    pub email: String,
}

/// The authenticated user's profile, as returned by `GET {base}/me/`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// User identifier
    #[serde(default)]
    pub id: Option<i64>,
    /// Username
    pub username: String,
    /// Email address
    #[serde(default)]
    pub email: String,
}

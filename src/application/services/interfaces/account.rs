use crate::application::models::account::UserProfile;
use crate::error::AppError;
use async_trait::async_trait;

/// Service for the authenticated user's profile
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Fetches the current user's profile from `GET /me/`
    async fn me(&self) -> Result<UserProfile, AppError>;
}

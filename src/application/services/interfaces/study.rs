use crate::application::models::page::Page;
use crate::application::models::study::{ReviewUpdate, UserCard};
use crate::error::AppError;
use async_trait::async_trait;

/// Service for study sessions against `/usercards/`
#[async_trait]
pub trait StudyService: Send + Sync {
    /// Lists the current user's study state, optionally for one deck
    async fn list_user_cards(&self, deck: Option<i64>) -> Result<Page<UserCard>, AppError>;

    /// Fetches the due-first study queue, optionally for one deck
    ///
    /// The server returns cards due now ordered by due date, falling back to
    /// all cards by due date when none are due.
    async fn review_queue(&self, deck: Option<i64>) -> Result<Page<UserCard>, AppError>;

    /// Submits a review rating or status change for one user card
    async fn submit_review(&self, id: i64, update: &ReviewUpdate) -> Result<UserCard, AppError>;

    /// Resets scheduling and ratings, optionally for one deck
    async fn reset_progress(&self, deck: Option<i64>) -> Result<Vec<UserCard>, AppError>;
}

use crate::application::models::page::Page;
use crate::application::models::study::{ReviewUpdate, UserCard};
use crate::application::services::StudyService;
use crate::config::Config;
use crate::error::AppError;
use crate::transport::CardioHttpClient;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

fn with_deck(path: &str, deck: Option<i64>) -> String {
    match deck {
        Some(deck) => format!("{path}?deck={deck}"),
        None => path.to_string(),
    }
}

/// Implementation of the study service
pub struct StudyServiceImpl<T: CardioHttpClient> {
    config: Arc<Config>,
    client: Arc<T>,
}

impl<T: CardioHttpClient> StudyServiceImpl<T> {
    /// Creates a new instance of the study service
    pub fn new(config: Arc<Config>, client: Arc<T>) -> Self {
        Self { config, client }
    }

    /// Gets the current configuration
    pub fn get_config(&self) -> &Config {
        &self.config
    }
}

#[async_trait]
impl<T: CardioHttpClient + 'static> StudyService for StudyServiceImpl<T> {
    async fn list_user_cards(&self, deck: Option<i64>) -> Result<Page<UserCard>, AppError> {
        self.client.get(&with_deck("usercards/", deck)).await
    }

    async fn review_queue(&self, deck: Option<i64>) -> Result<Page<UserCard>, AppError> {
        let path = with_deck("usercards/queue/", deck);
        debug!("Fetching review queue: {}", path);
        self.client.get(&path).await
    }

    async fn submit_review(&self, id: i64, update: &ReviewUpdate) -> Result<UserCard, AppError> {
        self.client.patch(&format!("usercards/{id}/"), update).await
    }

    async fn reset_progress(&self, deck: Option<i64>) -> Result<Vec<UserCard>, AppError> {
        info!("Resetting study progress");
        let path = with_deck("usercards/reset/", deck);
        self.client.post(&path, &()).await
    }
}

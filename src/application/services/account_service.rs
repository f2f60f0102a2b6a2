use crate::application::models::account::UserProfile;
use crate::application::services::AccountService;
use crate::config::Config;
use crate::error::AppError;
use crate::transport::CardioHttpClient;
use async_trait::async_trait;
use std::sync::Arc;

/// Implementation of the account service
pub struct AccountServiceImpl<T: CardioHttpClient> {
    config: Arc<Config>,
    client: Arc<T>,
}

impl<T: CardioHttpClient> AccountServiceImpl<T> {
    /// Creates a new instance of the account service
    pub fn new(config: Arc<Config>, client: Arc<T>) -> Self {
        Self { config, client }
    }

    /// Gets the current configuration
    pub fn get_config(&self) -> &Config {
        &self.config
    }
}

#[async_trait]
impl<T: CardioHttpClient + 'static> AccountService for AccountServiceImpl<T> {
    async fn me(&self) -> Result<UserProfile, AppError> {
        self.client.get("me/").await
    }
}

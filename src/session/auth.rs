//! Authentication manager for the Card.io API
//!
//! Handles the token lifecycle around the request client:
//! - login against `POST {base}/token/`, persisting the issued pair
//! - single-flight refresh against `POST {base}/token/refresh/`
//! - clearing credentials and signalling the host on irrecoverable failure

use crate::application::models::account::{RegisterRequest, RegisteredUser};
use crate::config::Config;
use crate::constants::{TOKEN_PATH, TOKEN_REFRESH_PATH, USER_AGENT};
use crate::error::AppError;
use crate::session::interface::{Authenticator, Navigator};
use crate::session::response::{LoginRequest, RefreshRequest, RefreshResponse, TokenPairResponse};
use crate::storage::{TokenPair, TokenStore};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

/// Authentication manager shared between the request client and the host
pub struct Auth {
    config: Arc<Config>,
    client: Client,
    store: Arc<dyn TokenStore>,
    navigator: Arc<dyn Navigator>,
    // Serializes refresh attempts so concurrent 401s do not trigger
    // redundant refresh calls against the API.
    refresh_lock: Mutex<()>,
}

impl Auth {
    /// Creates a new Auth instance
    ///
    /// # Arguments
    /// * `config` - API configuration
    /// * `store` - Durable credential storage shared with the request client
    /// * `navigator` - Host navigation sink for session-ended redirects
    pub fn new(config: Arc<Config>, store: Arc<dyn TokenStore>, navigator: Arc<dyn Navigator>) -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            client,
            store,
            navigator,
            refresh_lock: Mutex::new(()),
        }
    }

    /// Returns the shared credential store
    pub fn store(&self) -> Arc<dyn TokenStore> {
        self.store.clone()
    }

    /// Returns the configuration this manager was built with
    pub fn config(&self) -> Arc<Config> {
        self.config.clone()
    }

    /// Returns true if an access token is currently stored
    pub fn has_session(&self) -> Result<bool, AppError> {
        Ok(self.store.access_token()?.is_some())
    }

    /// Logs in using the credentials from the configuration
    ///
    /// # Returns
    /// * `Ok(TokenPair)` - The stored pair
    /// * `Err(AppError::InvalidInput)` - If the config carries no credentials
    pub async fn login_from_config(&self) -> Result<TokenPair, AppError> {
        let Some(credentials) = self.config.credentials.clone() else {
            return Err(AppError::InvalidInput(
                "no credentials in configuration".to_string(),
            ));
        };
        self.login(&credentials.username, &credentials.password)
            .await
    }

    /// Registers a new account via `POST {base}/register/`
    ///
    /// Registration is unauthenticated and does not touch the token store;
    /// callers log in afterwards.
    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisteredUser, AppError> {
        request.validate()?;

        let url = self.config.endpoint("register/");
        debug!("POST {}", url);

        let response = self.client.post(&url).json(request).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Registration failed with status {}: {}", status, body);
            return Err(AppError::Unexpected(status));
        }

        Ok(response.json().await?)
    }

    /// Clears the stored credentials and signals the host to navigate to the
    /// login route. Used on every irrecoverable auth failure.
    pub fn end_session(&self) {
        if let Err(e) = self.store.clear() {
            warn!("Failed to clear token store: {}", e);
        }
        self.navigator.redirect_to_login(&self.config.login_route);
    }
}

#[async_trait::async_trait]
impl Authenticator for Auth {
    async fn login(&self, username: &str, password: &str) -> Result<TokenPair, AppError> {
        let url = self.config.endpoint(TOKEN_PATH);

        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        debug!("Sending login request to: {}", url);

        let response = self.client.post(&url).json(&body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Login failed with status {}: {}", status, body);
            return Err(AppError::Unauthorized);
        }

        let json: TokenPairResponse = response.json().await?;
        let pair = TokenPair::new(json.access, json.refresh);
        self.store.store_pair(&pair)?;

        info!("Login successful for {}", username);
        Ok(pair)
    }

    async fn refresh_access(&self, stale_access: &str) -> Result<String, AppError> {
        let _guard = self.refresh_lock.lock().await;

        // A concurrent caller may have refreshed while we waited for the
        // lock; reuse its token instead of spending our refresh.
        if let Some(current) = self.store.access_token()?
            && current != stale_access
        {
            debug!("Access token already refreshed by a concurrent request");
            return Ok(current);
        }

        let Some(refresh) = self.store.refresh_token()? else {
            warn!("No refresh token stored, session cannot be recovered");
            self.end_session();
            return Err(AppError::SessionExpired);
        };

        let url = self.config.endpoint(TOKEN_REFRESH_PATH);
        info!("Refreshing access token");

        let response = self
            .client
            .post(&url)
            .json(&RefreshRequest { refresh })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Token refresh failed with status {}: {}", status, body);
            self.end_session();
            return Err(AppError::SessionExpired);
        }

        let json: RefreshResponse = response.json().await?;
        let Some(access) = json.usable_access() else {
            warn!("Token refresh response carried no access token");
            self.end_session();
            return Err(AppError::SessionExpired);
        };

        self.store.store_access(access)?;
        info!("Access token refreshed");
        Ok(access.to_string())
    }

    async fn logout(&self) -> Result<(), AppError> {
        info!("Logging out");
        self.store.clear()?;
        Ok(())
    }
}

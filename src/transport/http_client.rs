//! Authenticated request client for the Card.io API
//!
//! Every outbound call carries the stored access token as a bearer header.
//! On a 401 the client performs exactly one silent refresh-and-retry cycle;
//! anything beyond that clears the stored credentials and redirects the host
//! to the login route.
//!
//! State machine per call:
//! `Start → TokenPresent? → Send → (401 & RefreshTokenPresent?) → Refresh →
//! (Success → Retry → Return) | (Failure → ClearSession)`.

use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::session::auth::Auth;
use crate::session::interface::Authenticator;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client as HttpInternalClient, Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

/// HTTP client trait for the Card.io API
///
/// Services depend on this trait so tests can substitute fakes. `send`
/// implements the full authenticated-request contract and returns the raw
/// response; the typed helpers layer JSON handling on top.
#[async_trait::async_trait]
pub trait CardioHttpClient: Send + Sync {
    /// Issues an authenticated request and returns the raw response
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - Endpoint path relative to the API base (absolute URLs pass through)
    /// * `headers` - Caller-supplied headers, never dropped; `Content-Type`
    ///   defaults to JSON when the caller sets none
    /// * `body` - Optional JSON body
    ///
    /// # Returns
    /// * `Ok(Response)` - Any non-401 response, success or error, unmodified
    /// * `Err(AppError::NoSession)` - No access token was stored; no network
    ///   call was made, credentials were cleared, host redirected to login
    /// * `Err(AppError::SessionExpired)` - Refresh failed, or the retried
    ///   request was still unauthorized; credentials cleared, host redirected
    async fn send<B>(
        &self,
        method: Method,
        path: &str,
        headers: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<Response, AppError>
    where
        B: Serialize + Send + Sync;

    /// Issues an authenticated request and deserializes a 2xx JSON body
    ///
    /// Non-success statuses (other than the 401s handled by `send`) map to
    /// [`AppError::Unexpected`].
    async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, AppError>
    where
        B: Serialize + Send + Sync,
        T: DeserializeOwned;

    /// Makes a GET request
    async fn get<T>(&self, path: &str) -> Result<T, AppError>
    where
        T: DeserializeOwned,
    {
        self.request::<(), T>(Method::GET, path, None).await
    }

    /// Makes a POST request
    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + Send + Sync,
        T: DeserializeOwned,
    {
        self.request(Method::POST, path, Some(body)).await
    }

    /// Makes a PUT request
    async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + Send + Sync,
        T: DeserializeOwned,
    {
        self.request(Method::PUT, path, Some(body)).await
    }

    /// Makes a PATCH request
    async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + Send + Sync,
        T: DeserializeOwned,
    {
        self.request(Method::PATCH, path, Some(body)).await
    }

    /// Makes a DELETE request, expecting an empty success body
    async fn delete(&self, path: &str) -> Result<(), AppError> {
        let response = self
            .send::<()>(Method::DELETE, path, &[], None)
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("DELETE failed with status {}: {}", status, body);
            return Err(AppError::Unexpected(status));
        }
        Ok(())
    }
}

/// Authenticated HTTP client for the Card.io API
pub struct CardioHttpClientImpl {
    config: Arc<Config>,
    auth: Arc<Auth>,
    http_client: HttpInternalClient,
}

impl CardioHttpClientImpl {
    /// Creates a new client sharing the given authentication manager
    pub fn new(config: Arc<Config>, auth: Arc<Auth>) -> Self {
        let http_client = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            auth,
            http_client,
        }
    }

    /// Returns the shared authentication manager
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Dispatches a single attempt with the given access token
    async fn dispatch<B: Serialize>(
        &self,
        method: &Method,
        url: &str,
        headers: &[(&str, &str)],
        body: Option<&B>,
        access: &str,
    ) -> Result<Response, AppError> {
        debug!("{} {}", method, url);

        let mut request = self.http_client.request(method.clone(), url);

        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        if !headers
            .iter()
            .any(|(name, _)| name.eq_ignore_ascii_case("content-type"))
        {
            request = request.header(CONTENT_TYPE, "application/json");
        }
        request = request.header(AUTHORIZATION, format!("Bearer {access}"));

        if let Some(b) = body {
            request = request.json(b);
        }

        let response = request.send().await?;
        debug!("Response status: {}", response.status());
        Ok(response)
    }
}

#[async_trait::async_trait]
impl CardioHttpClient for CardioHttpClientImpl {
    async fn send<B>(
        &self,
        method: Method,
        path: &str,
        headers: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<Response, AppError>
    where
        B: Serialize + Send + Sync,
    {
        let store = self.auth.store();

        let Some(access) = store.access_token()? else {
            warn!("No access token stored, redirecting to login");
            self.auth.end_session();
            return Err(AppError::NoSession);
        };

        let url = self.config.endpoint(path);
        let response = self.dispatch(&method, &url, headers, body, &access).await?;

        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }

        if store.refresh_token()?.is_none() {
            warn!("Unauthorized and no refresh token stored");
            self.auth.end_session();
            return Err(AppError::SessionExpired);
        }

        // One refresh-and-retry cycle. refresh_access already clears the
        // session and signals the host when the refresh itself fails.
        let fresh = self.auth.refresh_access(&access).await?;

        debug!("Retrying {} {} with refreshed token", method, url);
        let retried = self.dispatch(&method, &url, headers, body, &fresh).await?;

        if retried.status() == StatusCode::UNAUTHORIZED {
            warn!("Still unauthorized after refresh, ending session");
            self.auth.end_session();
            return Err(AppError::SessionExpired);
        }

        Ok(retried)
    }

    async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, AppError>
    where
        B: Serialize + Send + Sync,
        T: DeserializeOwned,
    {
        let response = self.send(method, path, &[], body).await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Request failed with status {}: {}", status, body);
            return Err(AppError::Unexpected(status));
        }

        Ok(response.json().await?)
    }
}

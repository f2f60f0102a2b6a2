use crate::constants::{DEFAULT_PAGE_SIZE, DEFAULT_REST_TIMEOUT, LOGIN_ROUTE};
use crate::storage::{FileTokenStore, MemoryTokenStore, TokenStore};
use crate::utils::config::{env_or, env_value};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Login credentials for the Card.io API
pub struct Credentials {
    /// Username for the Card.io account
    pub username: String,
    /// Password for the Card.io account
    pub password: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the Card.io REST API
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the Card.io API client
pub struct Config {
    /// Login credentials, if provided via the environment
    pub credentials: Option<Credentials>,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Route the host is redirected to when the session ends
    pub login_route: String,
    /// Number of items to retrieve per page in API requests
    pub page_size: u32,
    /// Path of the JSON file used by the file-backed token store, if any
    pub token_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration instance from environment variables
    ///
    /// Loads `.env` first, then reads `CARDIO_*` variables, falling back to
    /// library defaults. Credentials are optional: a host that stores tokens
    /// itself never needs them.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let username: Option<String> = env_value("CARDIO_USERNAME");
        let password: Option<String> = env_value("CARDIO_PASSWORD");

        let credentials = match (username, password) {
            (Some(username), Some(password)) => Some(Credentials { username, password }),
            _ => None,
        };

        Config {
            credentials,
            rest_api: RestApiConfig {
                base_url: env_or(
                    "CARDIO_API_BASE_URL",
                    String::from("http://localhost:8000/api"),
                ),
                timeout: env_or("CARDIO_REST_TIMEOUT", DEFAULT_REST_TIMEOUT),
            },
            login_route: env_or("CARDIO_LOGIN_ROUTE", String::from(LOGIN_ROUTE)),
            page_size: env_or("CARDIO_PAGE_SIZE", DEFAULT_PAGE_SIZE),
            token_file: env_value("CARDIO_TOKEN_FILE"),
        }
    }

    /// Creates a configuration pointing at the given base URL, leaving every
    /// other field at its default. Mostly useful in tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Config {
            credentials: None,
            rest_api: RestApiConfig {
                base_url: base_url.into(),
                timeout: DEFAULT_REST_TIMEOUT,
            },
            login_route: String::from(LOGIN_ROUTE),
            page_size: DEFAULT_PAGE_SIZE,
            token_file: None,
        }
    }

    /// Builds the credential store this configuration selects
    ///
    /// A configured `CARDIO_TOKEN_FILE` picks the file-backed store so the
    /// session survives restarts; otherwise tokens live in memory for the
    /// life of the process.
    pub fn token_store(&self) -> Arc<dyn TokenStore> {
        match &self.token_file {
            Some(path) => Arc::new(FileTokenStore::new(path)),
            None => Arc::new(MemoryTokenStore::new()),
        }
    }

    /// Builds the full URL for a path relative to the API base
    ///
    /// Absolute URLs pass through untouched so callers can target endpoints
    /// outside the configured base.
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with("http") {
            path.to_string()
        } else {
            let path = path.trim_start_matches('/');
            format!("{}/{}", self.rest_api.base_url.trim_end_matches('/'), path)
        }
    }
}

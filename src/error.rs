//! Error types for the Card.io client
//!
//! All fallible operations in this crate return [`AppError`]. Authentication
//! failures are split into `NoSession` (the caller never authenticated) and
//! `SessionExpired` (the caller was authenticated but the refresh cycle
//! failed); both end with cleared credentials and a login redirect, the
//! distinction only exists for caller-side messaging.

use reqwest::StatusCode;
use std::fmt;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// No access token was stored when a request was attempted
    NoSession,
    /// The session could not be recovered: refresh failed, or the retried
    /// request was still unauthorized
    SessionExpired,
    /// Login was rejected by the API
    Unauthorized,
    /// The API returned an unexpected, non-401 error status
    Unexpected(StatusCode),
    /// Invalid input supplied by the caller
    InvalidInput(String),
    /// Network-level error from the HTTP client
    Network(reqwest::Error),
    /// JSON serialization/deserialization error
    Json(serde_json::Error),
    /// I/O error from token store persistence
    Io(std::io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NoSession => write!(f, "no active session"),
            AppError::SessionExpired => write!(f, "session expired"),
            AppError::Unauthorized => write!(f, "unauthorized"),
            AppError::Unexpected(status) => write!(f, "unexpected status: {status}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

impl AppError {
    /// Returns true for the terminal authentication failures that clear the
    /// stored credentials and redirect the host to the login route.
    #[must_use]
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, AppError::NoSession | AppError::SessionExpired)
    }
}

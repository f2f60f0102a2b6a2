//! Durable storage for session credentials
//!
//! The client holds exactly one active `(access, refresh)` pair at a time.
//! The pair is written on login, the access half is overwritten on refresh,
//! and everything is cleared on logout or irrecoverable auth failure.

use crate::constants::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};
use crate::error::AppError;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// An access/refresh token pair, both opaque bearer strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    /// Short-lived bearer credential authorizing API requests
    pub access: String,
    /// Longer-lived credential exchanged for a new access token
    pub refresh: String,
}

impl TokenPair {
    /// Creates a new token pair
    pub fn new(access: impl Into<String>, refresh: impl Into<String>) -> Self {
        Self {
            access: access.into(),
            refresh: refresh.into(),
        }
    }
}

/// Keyed credential storage shared by every request the client issues
///
/// Implementations must be safe to call from concurrent requests; the
/// refresh path in [`crate::session::auth::Auth`] serializes writers, but
/// readers may race freely.
pub trait TokenStore: Send + Sync {
    /// Returns the stored access token, if any
    fn access_token(&self) -> Result<Option<String>, AppError>;

    /// Returns the stored refresh token, if any
    fn refresh_token(&self) -> Result<Option<String>, AppError>;

    /// Stores a full token pair, replacing any previous one
    fn store_pair(&self, pair: &TokenPair) -> Result<(), AppError>;

    /// Overwrites only the access token, keeping the refresh token
    fn store_access(&self, access: &str) -> Result<(), AppError>;

    /// Removes both tokens
    fn clear(&self) -> Result<(), AppError>;
}

/// Process-local token store backed by an `RwLock`
///
/// The default choice for services and tests; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    tokens: RwLock<(Option<String>, Option<String>)>,
}

impl MemoryTokenStore {
    /// Creates an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given pair
    pub fn with_pair(pair: TokenPair) -> Self {
        Self {
            tokens: RwLock::new((Some(pair.access), Some(pair.refresh))),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn access_token(&self) -> Result<Option<String>, AppError> {
        let guard = self.tokens.read().unwrap_or_else(|e| e.into_inner());
        Ok(guard.0.clone())
    }

    fn refresh_token(&self) -> Result<Option<String>, AppError> {
        let guard = self.tokens.read().unwrap_or_else(|e| e.into_inner());
        Ok(guard.1.clone())
    }

    fn store_pair(&self, pair: &TokenPair) -> Result<(), AppError> {
        let mut guard = self.tokens.write().unwrap_or_else(|e| e.into_inner());
        *guard = (Some(pair.access.clone()), Some(pair.refresh.clone()));
        Ok(())
    }

    fn store_access(&self, access: &str) -> Result<(), AppError> {
        let mut guard = self.tokens.write().unwrap_or_else(|e| e.into_inner());
        guard.0 = Some(access.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), AppError> {
        let mut guard = self.tokens.write().unwrap_or_else(|e| e.into_inner());
        *guard = (None, None);
        Ok(())
    }
}

/// Token store persisted as a small JSON object on disk
///
/// The file holds the keys `accessToken` and `refreshToken`, matching the
/// key names the Card.io web client uses in browser-local storage. A missing
/// file reads as an empty store.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    // guards read-modify-write cycles against concurrent callers in-process
    lock: RwLock<()>,
}

impl FileTokenStore {
    /// Creates a store backed by the given file path
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: RwLock::new(()),
        }
    }

    fn read_map(&self) -> Result<Map<String, Value>, AppError> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(Map::new());
        }
        let value: Value = serde_json::from_str(&raw)?;
        match value {
            Value::Object(map) => Ok(map),
            _ => Ok(Map::new()),
        }
    }

    fn write_map(&self, map: &Map<String, Value>) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(&Value::Object(map.clone()))?;
        fs::write(&self.path, raw)?;
        Ok(())
    }

    fn read_key(&self, key: &str) -> Result<Option<String>, AppError> {
        let _guard = self.lock.read().unwrap_or_else(|e| e.into_inner());
        let map = self.read_map()?;
        Ok(map.get(key).and_then(Value::as_str).map(String::from))
    }
}

impl TokenStore for FileTokenStore {
    fn access_token(&self) -> Result<Option<String>, AppError> {
        self.read_key(ACCESS_TOKEN_KEY)
    }

    fn refresh_token(&self) -> Result<Option<String>, AppError> {
        self.read_key(REFRESH_TOKEN_KEY)
    }

    fn store_pair(&self, pair: &TokenPair) -> Result<(), AppError> {
        let _guard = self.lock.write().unwrap_or_else(|e| e.into_inner());
        let mut map = self.read_map()?;
        map.insert(
            ACCESS_TOKEN_KEY.to_string(),
            Value::String(pair.access.clone()),
        );
        map.insert(
            REFRESH_TOKEN_KEY.to_string(),
            Value::String(pair.refresh.clone()),
        );
        self.write_map(&map)
    }

    fn store_access(&self, access: &str) -> Result<(), AppError> {
        let _guard = self.lock.write().unwrap_or_else(|e| e.into_inner());
        let mut map = self.read_map()?;
        map.insert(
            ACCESS_TOKEN_KEY.to_string(),
            Value::String(access.to_string()),
        );
        self.write_map(&map)
    }

    fn clear(&self) -> Result<(), AppError> {
        let _guard = self.lock.write().unwrap_or_else(|e| e.into_inner());
        let mut map = self.read_map()?;
        map.remove(ACCESS_TOKEN_KEY);
        map.remove(REFRESH_TOKEN_KEY);
        self.write_map(&map)
    }
}

//! # cardio-client
//!
//! Rust client for the Card.io spaced-repetition flashcards API.
//!
//! The crate wraps every outbound call in bearer-token authentication with
//! a single silent refresh-and-retry on authorization failure, and exposes
//! typed services for decks, cards, card types, and study sessions.
//!
//! ## Example
//! ```ignore
//! use cardio_client::prelude::*;
//!
//! let config = Arc::new(Config::new());
//! let store: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::new());
//! let navigator: Arc<dyn Navigator> = Arc::new(TracingNavigator);
//!
//! let auth = Arc::new(Auth::new(config.clone(), store, navigator));
//! auth.login("ada", "hunter2!").await?;
//!
//! let client = Arc::new(CardioHttpClientImpl::new(config.clone(), auth));
//! let decks = DeckServiceImpl::new(config, client);
//! for deck in decks.list_decks().await?.iter() {
//!     println!("{}: {}", deck.id, deck.name);
//! }
//! ```

/// Typed models and API services
pub mod application;
/// Client configuration
pub mod config;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Commonly used types and traits
pub mod prelude;
/// Layout resolution for rendering cards
pub mod presentation;
/// Authentication manager and session interfaces
pub mod session;
/// Durable credential storage
pub mod storage;
/// Authenticated HTTP transport
pub mod transport;
/// Shared utilities
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}

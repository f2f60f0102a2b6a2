//! # Card.io Client Prelude
//!
//! Imports the most commonly used types and traits of the library in one
//! line.
//!
//! ## Usage
//!
//! ```rust
//! use cardio_client::prelude::*;
//!
//! let config = Config::with_base_url("http://localhost:8000/api");
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Card.io API client
pub use crate::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// AUTHENTICATION, SESSION, AND CREDENTIAL STORAGE
// ============================================================================

/// Authentication manager
pub use crate::session::auth::Auth;

/// Authenticator and host navigation traits
pub use crate::session::interface::{Authenticator, Navigator, TracingNavigator};

/// Wire types for the token endpoints
pub use crate::session::response::{RefreshResponse, TokenPairResponse};

/// Credential storage
pub use crate::storage::{FileTokenStore, MemoryTokenStore, TokenPair, TokenStore};

// ============================================================================
// TRANSPORT AND HTTP CLIENT
// ============================================================================

/// HTTP client trait
pub use crate::transport::CardioHttpClient;

/// HTTP client implementation
pub use crate::transport::CardioHttpClientImpl;

// ============================================================================
// CORE SERVICES (TRAITS)
// ============================================================================

/// Deck service trait for deck CRUD
pub use crate::application::services::DeckService;

/// Card service trait for card CRUD and generation
pub use crate::application::services::CardService;

/// Card type service trait for the layout designer
pub use crate::application::services::CardTypeService;

/// Study service trait for review sessions
pub use crate::application::services::StudyService;

/// Account service trait for profile information
pub use crate::application::services::AccountService;

// ============================================================================
// SERVICE IMPLEMENTATIONS
// ============================================================================

/// Deck service implementation
pub use crate::application::services::deck_service::DeckServiceImpl;

/// Card service implementation
pub use crate::application::services::card_service::CardServiceImpl;

/// Card type service implementation
pub use crate::application::services::card_type_service::CardTypeServiceImpl;

/// Study service implementation
pub use crate::application::services::study_service::StudyServiceImpl;

/// Account service implementation
pub use crate::application::services::account_service::AccountServiceImpl;

// ============================================================================
// MODELS
// ============================================================================

/// Deck models
pub use crate::application::models::deck::{Deck, DeckPatch, DeckRequest};

/// Card models
pub use crate::application::models::card::{
    Card, CardRequest, GenerateCardRequest, GeneratedCard,
};

/// Card type models
pub use crate::application::models::card_type::{CardLayout, CardType, CardTypeRequest};

/// Study models
pub use crate::application::models::study::{Rating, ReviewStatus, ReviewUpdate, UserCard};

/// Account models
pub use crate::application::models::account::{RegisterRequest, RegisteredUser, UserProfile};

/// Pagination envelope
pub use crate::application::models::page::Page;

// ============================================================================
// PRESENTATION LAYER
// ============================================================================

/// Layout resolution for rendering cards
pub use crate::presentation::{
    ResolvedLayout, is_starter_card_type, preview_fields, resolve_layout, visible_fields,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date/time handling
pub use chrono::{DateTime, Utc};

/// Re-export reqwest for HTTP operations
pub use reqwest::{Method, StatusCode};

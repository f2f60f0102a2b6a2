/// Account and profile operations
pub mod account;
/// Card CRUD and generation operations
pub mod card;
/// Card type designer operations
pub mod card_type;
/// Deck CRUD operations
pub mod deck;
/// Study queue and review operations
pub mod study;

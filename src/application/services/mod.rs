/// Module containing the account service for profile information
pub mod account_service;
/// Module containing the card service for card CRUD and generation
pub mod card_service;
/// Module containing the card type service for the layout designer
pub mod card_type_service;
/// Module containing the deck service for deck CRUD
pub mod deck_service;
/// Module containing service interfaces and traits
pub mod interfaces;
/// Module containing the study service for review sessions
pub mod study_service;

pub use interfaces::account::*;
pub use interfaces::card::*;
pub use interfaces::card_type::*;
pub use interfaces::deck::*;
pub use interfaces::study::*;

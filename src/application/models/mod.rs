/// Module containing account and profile models
pub mod account;
/// Module containing card models
pub mod card;
/// Module containing card type and layout models
pub mod card_type;
/// Module containing deck models
pub mod deck;
/// Module containing the pagination envelope
pub mod page;
/// Module containing study progress models
pub mod study;
/// Module containing serde helpers shared by the models
pub mod utils;

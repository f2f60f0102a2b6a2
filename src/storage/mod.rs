/// Module containing the credential store trait and its implementations
pub mod token_store;

pub use token_store::{FileTokenStore, MemoryTokenStore, TokenPair, TokenStore};

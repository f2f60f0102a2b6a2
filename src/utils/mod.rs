/// Helpers for reading configuration values from the environment
pub mod config;
/// Logging setup utilities
pub mod logger;

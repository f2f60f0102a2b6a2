/// Module containing typed models for the Card.io API
pub mod models;
/// Module containing API services
pub mod services;

/// Module containing the authentication manager
pub mod auth;
/// Module containing the authenticator and navigation traits
pub mod interface;
/// Module containing wire types for the token endpoints
pub mod response;

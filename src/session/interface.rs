use crate::error::AppError;
use crate::storage::TokenPair;
use tracing::warn;

/// Receives the navigation side effect when a session ends
///
/// When the client clears stored credentials it asks the host application to
/// move to the login entry point. Navigation is an observable side effect on
/// the host environment, not a return value; library errors still surface as
/// [`AppError::NoSession`] or [`AppError::SessionExpired`].
pub trait Navigator: Send + Sync {
    /// Asks the host to navigate to the given login route
    fn redirect_to_login(&self, route: &str);
}

/// Default [`Navigator`] that only logs the redirect request
///
/// Hosts with a real navigation stack (a UI shell, a TUI router) install
/// their own implementation.
#[derive(Debug, Default)]
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn redirect_to_login(&self, route: &str) {
        warn!("Session ended, host should navigate to {}", route);
    }
}

/// Trait for authenticating against the Card.io API
#[async_trait::async_trait]
pub trait Authenticator: Send + Sync {
    /// Logs in with the given credentials and persists the token pair
    ///
    /// # Returns
    /// * `Ok(TokenPair)` - The freshly issued pair, already stored
    /// * `Err(AppError::Unauthorized)` - If the API rejected the credentials
    async fn login(&self, username: &str, password: &str) -> Result<TokenPair, AppError>;

    /// Exchanges the stored refresh token for a new access token
    ///
    /// `stale_access` is the access token the caller just saw fail; when a
    /// concurrent caller already refreshed, the stored token differs from the
    /// stale one and is returned without another network call.
    ///
    /// On failure the stored credentials are cleared and the host is
    /// redirected to the login route.
    async fn refresh_access(&self, stale_access: &str) -> Result<String, AppError>;

    /// Clears the stored credentials
    async fn logout(&self) -> Result<(), AppError>;
}

/// Storage key under which the access token is persisted
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
/// Storage key under which the refresh token is persisted
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";
/// Route the host application is redirected to when the session ends
pub const LOGIN_ROUTE: &str = "/login";
/// Path of the token-obtain endpoint, relative to the API base URL
pub const TOKEN_PATH: &str = "token/";
/// Path of the token-refresh endpoint, relative to the API base URL
pub const TOKEN_REFRESH_PATH: &str = "token/refresh/";
/// Default page size for paginated API requests
pub const DEFAULT_PAGE_SIZE: u32 = 50;
/// Default timeout in seconds for REST API requests
pub const DEFAULT_REST_TIMEOUT: u64 = 30;
/// Number of preview fields shown for a card when its type declares none
pub const DEFAULT_PREVIEW_FIELD_COUNT: usize = 2;
/// User agent string used in HTTP requests to identify this client to the Card.io API
pub const USER_AGENT: &str = "cardio-client/0.1.0";

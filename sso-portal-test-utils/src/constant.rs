//! Test configuration constants for the OAuth client setup.
//!
//! These values are not real credentials but placeholder values for testing purposes.

/// Mock OAuth2 client ID for testing.
pub static TEST_CLIENT_ID: &str = "portal_client_id";

/// Mock OAuth2 client secret for testing.
pub static TEST_CLIENT_SECRET: &str = "portal_client_secret";

/// Public base URL of the application under test.
pub static TEST_BASE_URL: &str = "http://localhost:3000";

/// Mock authorization code returned by the provider.
pub static TEST_AUTH_CODE: &str = "test_authorization_code";

/// Mock access token issued by the token endpoint.
pub static TEST_ACCESS_TOKEN: &str = "test_access_token";

/// Session key holding the authenticated user's claims.
pub static TEST_SESSION_USER_KEY: &str = "user";

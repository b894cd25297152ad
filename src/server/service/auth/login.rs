use crate::server::{model::auth::AuthenticationData, oauth::OAuthClient};

/// Scopes requested from the identity provider.
pub const LOGIN_SCOPES: [&str; 3] = ["openid", "profile", "email"];

/// Builds the provider login URL along with the CSRF state and PKCE verifier to store.
pub fn login_service(oauth_client: &OAuthClient) -> AuthenticationData {
    let scopes = LOGIN_SCOPES.iter().map(|scope| scope.to_string()).collect();

    oauth_client.login_url(scopes)
}

use oauth2::TokenResponse;

use crate::server::{error::Error, model::auth::IdentityClaims, oauth::OAuthClient};

/// Exchanges the authorization code and returns the user's identity claims.
///
/// # Arguments
/// - `oauth_client` - Client bound to the identity provider
/// - `code` - Authorization code from the callback query
/// - `pkce_verifier` - Verifier stored in session at login initiation
///
/// # Returns
/// - `Ok(IdentityClaims)` - Claims reported by the provider's userinfo endpoint
/// - `Err(Error::TokenExchangeError)` - Code invalid, expired or rejected
/// - `Err(Error::HttpError)` - Userinfo request failed
pub async fn callback_service(
    oauth_client: &OAuthClient,
    code: &str,
    pkce_verifier: String,
) -> Result<IdentityClaims, Error> {
    let token = oauth_client.get_token(code, pkce_verifier).await?;

    let claims = oauth_client.get_userinfo(token.access_token()).await?;

    Ok(claims)
}

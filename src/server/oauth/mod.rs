//! OAuth2 / OpenID Connect client adapter.
//!
//! Wraps the identity provider's authorization, token and userinfo endpoints behind the two
//! operations the portal needs: building the login redirect and exchanging an authorization
//! code for the user's identity claims. The protocol itself is handled by the `oauth2` crate.

pub mod discovery;

use oauth2::{
    basic::{BasicClient, BasicTokenResponse},
    AccessToken, AuthUrl, AuthorizationCode, ClientId, ClientSecret, CsrfToken, EndpointNotSet,
    EndpointSet, PkceCodeChallenge, PkceCodeVerifier, RedirectUrl, Scope, TokenUrl,
};
use url::{form_urlencoded, Url};

use crate::server::{
    error::Error,
    model::auth::{AuthenticationData, IdentityClaims},
};

pub use discovery::ProviderMetadata;

/// Path of the provider's logout endpoint relative to the issuer.
pub const LOGOUT_PATH: &str = "/v2/logout";

/// Path of this application's callback route.
pub const CALLBACK_PATH: &str = "/callback";

type ProviderClient =
    BasicClient<EndpointSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

/// Values identifying this application to the identity provider.
#[derive(Clone, Debug)]
pub struct OAuthSettings {
    /// Provider issuer URL, e.g. `https://tenant.eu.auth0.com`.
    pub issuer_url: String,
    pub client_id: String,
    pub client_secret: String,
    /// Public base URL of this application.
    pub base_url: String,
}

/// OAuth2 client bound to a single identity provider.
#[derive(Clone, Debug)]
pub struct OAuthClient {
    inner: ProviderClient,
    http_client: reqwest::Client,
    userinfo_url: Url,
    issuer_url: String,
    client_id: String,
    base_url: String,
}

impl OAuthClient {
    /// Builds the client from settings and previously discovered provider endpoints.
    ///
    /// # Returns
    /// - `Ok(OAuthClient)` - Client ready to build login URLs and exchange codes
    /// - `Err(Error::UrlParseError)` - The callback URL derived from `base_url` is invalid
    /// - `Err(Error::HttpError)` - The HTTP client could not be constructed
    pub fn new(settings: OAuthSettings, metadata: ProviderMetadata) -> Result<Self, Error> {
        let base_url = settings.base_url.trim_end_matches('/').to_string();
        let redirect_url = RedirectUrl::new(format!("{}{}", base_url, CALLBACK_PATH))?;

        let inner = BasicClient::new(ClientId::new(settings.client_id.clone()))
            .set_client_secret(ClientSecret::new(settings.client_secret))
            .set_auth_uri(AuthUrl::from_url(metadata.authorization_endpoint))
            .set_token_uri(TokenUrl::from_url(metadata.token_endpoint))
            .set_redirect_uri(redirect_url);

        Ok(Self {
            inner,
            http_client: build_http_client()?,
            userinfo_url: metadata.userinfo_endpoint,
            issuer_url: settings.issuer_url.trim_end_matches('/').to_string(),
            client_id: settings.client_id,
            base_url,
        })
    }

    /// Discovers the provider's endpoints, then builds the client.
    pub async fn discover(settings: OAuthSettings) -> Result<Self, Error> {
        let http_client = build_http_client()?;
        let metadata = ProviderMetadata::discover(&http_client, &settings.issuer_url).await?;

        Self::new(settings, metadata)
    }

    /// Builds the authorization URL for the requested scopes.
    ///
    /// A fresh CSRF state and PKCE (S256) challenge are generated for every call; the caller
    /// is responsible for storing the returned state and verifier until the callback.
    pub fn login_url(&self, scopes: Vec<String>) -> AuthenticationData {
        let (pkce_challenge, pkce_verifier) = PkceCodeChallenge::new_random_sha256();

        let (url, state) = self
            .inner
            .authorize_url(CsrfToken::new_random)
            .add_scopes(scopes.into_iter().map(Scope::new))
            .set_pkce_challenge(pkce_challenge)
            .url();

        AuthenticationData {
            login_url: url.to_string(),
            state: state.secret().to_string(),
            pkce_verifier: pkce_verifier.secret().to_string(),
        }
    }

    /// Exchanges an authorization code at the provider's token endpoint.
    pub async fn get_token(
        &self,
        code: &str,
        pkce_verifier: String,
    ) -> Result<BasicTokenResponse, Error> {
        let token = self
            .inner
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .set_pkce_verifier(PkceCodeVerifier::new(pkce_verifier))
            .request_async(&self.http_client)
            .await?;

        Ok(token)
    }

    /// Fetches the identity claims for an access token from the userinfo endpoint.
    pub async fn get_userinfo(&self, access_token: &AccessToken) -> Result<IdentityClaims, Error> {
        let claims = self
            .http_client
            .get(self.userinfo_url.clone())
            .bearer_auth(access_token.secret())
            .send()
            .await?
            .error_for_status()?
            .json::<IdentityClaims>()
            .await?;

        Ok(claims)
    }

    /// Provider logout URL returning the browser to this application's home page.
    ///
    /// Query parameters are form encoded (`+` for spaces).
    pub fn logout_url(&self) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("returnTo", &format!("{}/", self.base_url))
            .append_pair("client_id", &self.client_id)
            .finish();

        format!("{}{}?{}", self.issuer_url, LOGOUT_PATH, query)
    }
}

// Redirects are not followed so a token endpoint cannot bounce the request elsewhere.
fn build_http_client() -> Result<reqwest::Client, Error> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

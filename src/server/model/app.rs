use crate::server::oauth::OAuthClient;

/// Application context constructed once at startup and handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub oauth_client: OAuthClient,
}

use axum::Router;
use sha2::{Digest, Sha512};
use time::Duration;
use tower_sessions::{
    cookie::{Key, SameSite},
    Expiry, MemoryStore, SessionManagerLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{config::Config, error::Error, oauth::OAuthClient};

/// Initialise the global tracing subscriber, honouring `RUST_LOG` (default `info`)
pub fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Discover the identity provider's endpoints and build the OAuth client
pub async fn build_oauth_client(config: &Config) -> Result<OAuthClient, Error> {
    let oauth_client = OAuthClient::discover(config.oauth_settings()).await?;

    tracing::info!(issuer = %config.issuer_url(), "Discovered identity provider endpoints");

    Ok(oauth_client)
}

/// Derive the 64 byte cookie signing key from the application secret
pub fn session_key(app_secret_key: &str) -> Key {
    let digest = Sha512::digest(app_secret_key.as_bytes());

    Key::from(&digest[..])
}

/// Configure session management with signed cookies on `router`
pub fn with_session(router: Router, config: &Config) -> Router {
    let session_store = MemoryStore::default();

    // Set secure based on build mode: in development (debug) use false, otherwise true.
    let development_mode = cfg!(debug_assertions);
    let secure_cookies = !development_mode;

    let session = SessionManagerLayer::new(session_store)
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)))
        .with_signed(session_key(&config.app_secret_key));

    router.layer(session)
}

use serde::Deserialize;
use url::Url;

use crate::server::error::Error;

/// Path of the OpenID Connect discovery document relative to the issuer.
pub const DISCOVERY_PATH: &str = "/.well-known/openid-configuration";

/// Endpoints read from the provider's OpenID Connect discovery document.
#[derive(Clone, Debug, Deserialize)]
pub struct ProviderMetadata {
    pub authorization_endpoint: Url,
    pub token_endpoint: Url,
    pub userinfo_endpoint: Url,
}

impl ProviderMetadata {
    /// Fetches the discovery document for `issuer_url`.
    ///
    /// # Returns
    /// - `Ok(ProviderMetadata)` - Document fetched and required endpoints present
    /// - `Err(Error::HttpError)` - Provider unreachable, non-success status or malformed document
    pub async fn discover(
        http_client: &reqwest::Client,
        issuer_url: &str,
    ) -> Result<Self, Error> {
        let url = format!("{}{}", issuer_url.trim_end_matches('/'), DISCOVERY_PATH);

        tracing::debug!(url = %url, "Fetching OpenID Connect discovery document");

        let metadata = http_client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<ProviderMetadata>()
            .await?;

        Ok(metadata)
    }
}

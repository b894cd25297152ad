//! Environment-driven application configuration.
//!
//! Configuration is read once at startup (after an optional `.env` file has been loaded by
//! `dotenvy`) and is read-only afterwards.

use crate::server::{error::config::ConfigError, oauth::OAuthSettings};

/// Port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;

/// Process-wide configuration values.
pub struct Config {
    /// Secret used to sign the session cookie.
    pub app_secret_key: String,
    /// Identity provider domain, e.g. `tenant.eu.auth0.com`.
    pub auth0_domain: String,
    pub auth0_client_id: String,
    pub auth0_client_secret: String,
    /// Listening port.
    pub port: u16,
    /// Public base URL of this application, used for the callback and post-logout URLs.
    pub base_url: String,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables are present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - A required variable is unset or empty
    /// - `Err(ConfigError::InvalidEnvValue)` - `PORT` or `APP_BASE_URL` cannot be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String, ConfigError> {
            match lookup(key) {
                Some(value) if !value.trim().is_empty() => Ok(value),
                _ => Err(ConfigError::MissingEnvVar(key.to_string())),
            }
        };

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "PORT".to_string(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_PORT,
        };

        let base_url = match lookup("APP_BASE_URL") {
            Some(value) => {
                url::Url::parse(&value).map_err(|e| ConfigError::InvalidEnvValue {
                    var: "APP_BASE_URL".to_string(),
                    reason: e.to_string(),
                })?;
                value.trim_end_matches('/').to_string()
            }
            None => format!("http://localhost:{}", port),
        };

        Ok(Self {
            app_secret_key: required("APP_SECRET_KEY")?,
            auth0_domain: required("AUTH0_DOMAIN")?,
            auth0_client_id: required("AUTH0_CLIENT_ID")?,
            auth0_client_secret: required("AUTH0_CLIENT_SECRET")?,
            port,
            base_url,
        })
    }

    /// Issuer URL of the identity provider, derived from the configured domain.
    pub fn issuer_url(&self) -> String {
        format!("https://{}", self.auth0_domain.trim_end_matches('/'))
    }

    /// Settings used to build the [`crate::server::oauth::OAuthClient`].
    pub fn oauth_settings(&self) -> OAuthSettings {
        OAuthSettings {
            issuer_url: self.issuer_url(),
            client_id: self.auth0_client_id.clone(),
            client_secret: self.auth0_client_secret.clone(),
            base_url: self.base_url.clone(),
        }
    }
}

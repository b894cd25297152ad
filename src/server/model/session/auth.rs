//! Login session data models.
//!
//! This module provides type-safe wrappers for the transient values stored in the session
//! between login initiation and the OAuth callback: the CSRF state token and the PKCE code
//! verifier. Both are generated when the authorization URL is built and consumed exactly once
//! when the provider redirects back.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::{auth::AuthError, Error};

/// Session key for storing CSRF state token.
pub const SESSION_AUTH_CSRF_KEY: &str = "portal:auth:csrf";

/// Session key for storing the PKCE code verifier.
pub const SESSION_AUTH_PKCE_KEY: &str = "portal:auth:pkce";

/// Session wrapper for CSRF state token storage.
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionAuthCsrf(pub String);

impl SessionAuthCsrf {
    /// Inserts the CSRF state token into the session.
    ///
    /// Stores the CSRF state token in the session during login initiation. This token will be
    /// validated against the state parameter in the callback URL.
    ///
    /// # Arguments
    /// - `session` - User's session for storing the CSRF token
    /// - `state` - CSRF state token to store (randomly generated string)
    ///
    /// # Returns
    /// - `Ok(())` - CSRF token successfully stored in session
    /// - `Err(Error)` - Session storage failed
    pub async fn insert(session: &Session, state: &str) -> Result<(), Error> {
        session
            .insert(SESSION_AUTH_CSRF_KEY, SessionAuthCsrf(state.to_string()))
            .await?;

        Ok(())
    }

    /// Retrieves the CSRF state token from the session without removing it.
    ///
    /// # Returns
    /// - `Ok(String)` - CSRF token found
    /// - `Err(Error::AuthError(AuthError::CsrfMissingValue))` - No CSRF token in session
    /// - `Err(Error)` - Session retrieval failed
    pub async fn get(session: &Session) -> Result<String, Error> {
        match session.get::<SessionAuthCsrf>(SESSION_AUTH_CSRF_KEY).await? {
            Some(SessionAuthCsrf(csrf)) => Ok(csrf),
            None => Err(AuthError::CsrfMissingValue.into()),
        }
    }

    /// Removes and returns the CSRF state token from the session.
    ///
    /// Ensures the token can only be used once.
    ///
    /// # Returns
    /// - `Ok(String)` - CSRF token found, removed, and returned
    /// - `Err(Error::AuthError(AuthError::CsrfMissingValue))` - No CSRF token in session
    /// - `Err(Error)` - Session operation failed
    pub async fn remove(session: &Session) -> Result<String, Error> {
        match session.remove::<SessionAuthCsrf>(SESSION_AUTH_CSRF_KEY).await? {
            Some(SessionAuthCsrf(csrf)) => Ok(csrf),
            None => Err(AuthError::CsrfMissingValue.into()),
        }
    }
}

/// Session wrapper for the PKCE code verifier.
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionAuthPkce(pub String);

impl SessionAuthPkce {
    /// Inserts the PKCE code verifier into the session.
    pub async fn insert(session: &Session, verifier: &str) -> Result<(), Error> {
        session
            .insert(SESSION_AUTH_PKCE_KEY, SessionAuthPkce(verifier.to_string()))
            .await?;

        Ok(())
    }

    /// Removes and returns the PKCE code verifier from the session.
    ///
    /// # Returns
    /// - `Ok(String)` - Verifier found, removed, and returned
    /// - `Err(Error::AuthError(AuthError::PkceMissingValue))` - No verifier in session
    pub async fn remove(session: &Session) -> Result<String, Error> {
        match session.remove::<SessionAuthPkce>(SESSION_AUTH_PKCE_KEY).await? {
            Some(SessionAuthPkce(verifier)) => Ok(verifier),
            None => Err(AuthError::PkceMissingValue.into()),
        }
    }
}

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::{error::Error, model::auth::IdentityClaims};

/// Session key holding the authenticated user's claims.
pub const SESSION_USER_KEY: &str = "user";

/// Authenticated user stored in session.
///
/// A session is authenticated if and only if this entry is present. Serializes transparently
/// as the claims object itself.
#[derive(Deserialize, Serialize, Debug)]
pub struct SessionUser(pub IdentityClaims);

impl SessionUser {
    /// Insert the user's claims into session
    pub async fn insert(session: &Session, claims: &IdentityClaims) -> Result<(), Error> {
        session
            .insert(SESSION_USER_KEY, SessionUser(claims.clone()))
            .await?;

        Ok(())
    }

    /// Get the user's claims from session, `None` when unauthenticated
    pub async fn get(session: &Session) -> Result<Option<IdentityClaims>, Error> {
        Ok(session
            .get::<SessionUser>(SESSION_USER_KEY)
            .await?
            .map(|SessionUser(claims)| claims))
    }
}

use axum::{extract::Request, middleware::Next, response::Response};
use tower_sessions::{session::Error as SessionError, Session};

use crate::server::{
    error::{auth::AuthError, Error},
    model::session::user::SessionUser,
    util::time::utc_timestamp,
};

/// Middleware requiring an authenticated user in session.
///
/// When the session holds no user, or one that does not decode as claims, logs the attempt and rejects with 401 without running
/// `next`. Otherwise the user's [`IdentityClaims`](crate::server::model::auth::IdentityClaims)
/// are added to the request extensions and `next` runs with the request unchanged.
///
/// # Usage
/// ```ignore
/// let protected_routes = Router::new()
///     .route("/protected", get(protected))
///     .route_layer(middleware::from_fn(require_auth));
/// ```
pub async fn require_auth(
    session: Session,
    mut request: Request,
    next: Next,
) -> Result<Response, Error> {
    let user = match SessionUser::get(&session).await {
        Ok(user) => user,
        // A `user` entry that no longer decodes as claims counts as logged out
        Err(Error::SessionError(SessionError::SerdeJson(err))) => {
            tracing::debug!("Ignoring undecodable session user: {}", err);
            None
        }
        Err(err) => return Err(err),
    };

    let Some(claims) = user else {
        tracing::warn!(timestamp = %utc_timestamp(), "UNAUTHORIZED ACCESS ATTEMPT");

        return Err(AuthError::Unauthorized.into());
    };

    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}

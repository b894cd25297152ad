use axum::Extension;

use crate::server::{model::auth::IdentityClaims, util::time::utc_timestamp};

/// Protected page greeting the authenticated user
///
/// Must be composed behind [`require_auth`](crate::server::middleware::auth::require_auth),
/// which supplies the claims extension.
///
/// # Responses
/// - 200 (OK): Plain text greeting containing the user's email
pub async fn protected(Extension(claims): Extension<IdentityClaims>) -> String {
    tracing::info!(
        user_id = %claims.sub(),
        timestamp = %utc_timestamp(),
        "PROTECTED ACCESS"
    );

    format!(
        "Welcome to the protected page, {}!",
        claims.email_or_empty()
    )
}

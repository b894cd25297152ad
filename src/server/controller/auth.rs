use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect},
    Form,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::server::{
    controller::util::csrf::validate_csrf,
    error::{auth::AuthError, Error},
    model::{
        app::AppState,
        session::{
            auth::{SessionAuthCsrf, SessionAuthPkce},
            user::SessionUser,
        },
    },
    service::auth::{callback::callback_service, login::login_service},
    util::time::utc_timestamp,
};

/// Authorization response from the provider.
///
/// A successful response carries `code`, a failed one (e.g. the user denied consent) carries
/// `error` and usually `error_description` instead.
#[derive(Deserialize)]
pub struct CallbackParams {
    pub state: String,
    pub code: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

/// Login route to initiate login with the identity provider
///
/// Creates the provider's authorization URL, stores the CSRF state and PKCE verifier in session
/// and redirects the user to begin the login process. Any previous session state is ignored.
///
/// # Responses
/// - 307 (Temporary Redirect): Redirects user to the provider's authorization endpoint
/// - 500 (Internal Server Error): The login state could not be stored in session
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let login = login_service(&state.oauth_client);

    SessionAuthCsrf::insert(&session, &login.state).await?;
    SessionAuthPkce::insert(&session, &login.pkce_verifier).await?;

    Ok(Redirect::temporary(&login.login_url))
}

/// Callback route the provider redirects to after login
///
/// Exchanges the authorization code for tokens, fetches the user's claims and stores them in
/// session.
///
/// # Responses
/// - 307 (Temporary Redirect): Successful login, redirect to the home page
/// - 400 (Bad Request): CSRF state mismatch with the state stored in session
/// - 500 (Internal Server Error): Login state missing from session, the provider returned an
///   error instead of a code, or the code exchange or userinfo request failed
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    params: Query<CallbackParams>,
) -> Result<impl IntoResponse, Error> {
    complete_login(&state, &session, params.0).await
}

/// Callback route for providers posting the authorization response (`response_mode=form_post`)
///
/// Behaves exactly like [`callback`].
pub async fn callback_form(
    State(state): State<AppState>,
    session: Session,
    params: Form<CallbackParams>,
) -> Result<impl IntoResponse, Error> {
    complete_login(&state, &session, params.0).await
}

async fn complete_login(
    state: &AppState,
    session: &Session,
    params: CallbackParams,
) -> Result<Redirect, Error> {
    validate_csrf(session, &params.state).await?;

    let pkce_verifier = SessionAuthPkce::remove(session).await?;

    let Some(code) = params.code else {
        let reason = match (params.error, params.error_description) {
            (Some(error), Some(description)) => format!("{}: {}", error, description),
            (Some(error), None) => error,
            (None, _) => "no authorization code returned".to_string(),
        };

        return Err(AuthError::AuthorizationFailed(reason).into());
    };

    let claims = callback_service(&state.oauth_client, &code, pkce_verifier).await?;

    SessionUser::insert(session, &claims).await?;

    tracing::info!(
        user_id = %claims.sub(),
        email = %claims.email_or_empty(),
        timestamp = %utc_timestamp(),
        "LOGIN"
    );

    Ok(Redirect::temporary("/"))
}

/// Logs the user out by deleting their session
///
/// # Responses
/// - 307 (Temporary Redirect): Redirect to the provider's logout endpoint, which returns the
///   browser to the home page
/// - 500 (Internal Server Error): The session could not be deleted from the store
pub async fn logout(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    // Only flush sessions holding data, a fresh session has nothing to delete
    if !session.is_empty().await {
        session.flush().await?;
    }

    Ok(Redirect::temporary(&state.oauth_client.logout_url()))
}

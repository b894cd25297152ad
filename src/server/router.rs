//! HTTP routing configuration.
//!
//! This module defines the application's HTTP routes and composes the access guard and the
//! router-wide 401 handler into the handler chain.

use axum::{middleware, routing::get, Router};

use crate::server::{
    controller,
    middleware::{auth::require_auth, unauthorized::handle_unauthorized},
    model::app::AppState,
};

/// Builds the application's HTTP router.
///
/// # Registered Endpoints
/// - `GET /` - Home page reflecting session state
/// - `GET /login` - Redirect to the identity provider
/// - `GET|POST /callback` - Provider callback, populates session
/// - `GET /logout` - Clear session, redirect to provider logout
/// - `GET /protected` - Greeting for authenticated users, guarded by [`require_auth`]
///
/// Every 401 produced by any route passes through [`handle_unauthorized`].
///
/// # Returns
/// An Axum `Router<AppState>` ready to receive its state and the session layer.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { oauth_client }).layer(session);
/// ```
pub fn routes() -> Router<AppState> {
    let protected = Router::new()
        .route("/protected", get(controller::protected::protected))
        .route_layer(middleware::from_fn(require_auth));

    Router::new()
        .route("/", get(controller::home::home))
        .route("/login", get(controller::auth::login))
        .route(
            "/callback",
            get(controller::auth::callback).post(controller::auth::callback_form),
        )
        .route("/logout", get(controller::auth::logout))
        .merge(protected)
        .layer(middleware::map_response(handle_unauthorized))
}

//! Error types for the portal server.
//!
//! This module provides the error handling system with specialized error types for the
//! authentication flow and configuration. All errors implement `IntoResponse` for Axum HTTP
//! responses and use `thiserror` for ergonomic error definitions with automatic `Display` and
//! `Error` trait implementations.

pub mod auth;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use oauth2::{basic::BasicErrorResponse, HttpClientError, RequestTokenError};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError},
};

/// Error returned by the token endpoint exchange.
pub type OAuth2TokenError = RequestTokenError<HttpClientError<reqwest::Error>, BasicErrorResponse>;

/// Main error type for the portal server.
///
/// This enum aggregates all domain-specific error types and external library errors into a
/// single unified error type. It uses `thiserror`'s `#[from]` attribute to enable automatic
/// conversion from underlying error types via the `?` operator. The `IntoResponse` implementation
/// maps errors to appropriate HTTP responses.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Authentication errors (unauthenticated access, CSRF, PKCE)
/// - Identity provider errors (discovery, token exchange, userinfo)
/// - External library errors (sessions, serialization, I/O)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (unauthenticated access, CSRF and PKCE validation).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// URL parse error (provider endpoints, callback URL).
    #[error(transparent)]
    UrlParseError(#[from] url::ParseError),
    /// Authorization code exchange with the identity provider failed.
    #[error("Failed to exchange authorization code: {0}")]
    TokenExchangeError(#[from] OAuth2TokenError),
    /// HTTP error talking to the identity provider (discovery, userinfo).
    #[error(transparent)]
    HttpError(#[from] reqwest::Error),
    /// JSON serialization error.
    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// I/O error (binding or serving the listener).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - CSRF state mismatch during callback
/// - 401 Unauthorized - No authenticated user in session
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

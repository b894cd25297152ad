use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

/// Body returned with every 401 response.
pub const UNAUTHORIZED_BODY: &str = "Unauthorized";

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("No authenticated user is present in session")]
    Unauthorized,
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,
    #[error("Failed to login user due to CSRF state missing from session")]
    CsrfMissingValue,
    #[error("Failed to login user due to PKCE verifier missing from session")]
    PkceMissingValue,
    #[error("Identity provider did not authorize the login: {0}")]
    AuthorizationFailed(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::Unauthorized => (StatusCode::UNAUTHORIZED, UNAUTHORIZED_BODY).into_response(),
            Self::CsrfValidationFailed => {
                tracing::debug!("{}", self);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: "There was an issue logging you in, please try again.".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::CsrfMissingValue | Self::PkceMissingValue | Self::AuthorizationFailed(_) => {
                InternalServerError(self).into_response()
            }
        }
    }
}

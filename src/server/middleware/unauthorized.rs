use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::server::{error::auth::UNAUTHORIZED_BODY, util::time::utc_timestamp};

/// Response mapper applied to every route: any 401 is logged and replaced by a plain
/// `Unauthorized` body.
///
/// Guard rejections are logged a second time here.
pub async fn handle_unauthorized(response: Response) -> Response {
    if response.status() != StatusCode::UNAUTHORIZED {
        return response;
    }

    tracing::warn!(timestamp = %utc_timestamp(), "UNAUTHORIZED ACCESS HANDLED");

    (StatusCode::UNAUTHORIZED, UNAUTHORIZED_BODY).into_response()
}

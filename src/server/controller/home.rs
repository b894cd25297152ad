use axum::response::Html;
use tower_sessions::Session;

use crate::server::{error::Error, model::session::user::SessionUser, view::home::render_home};

/// Public home page reflecting the session's login state
///
/// # Responses
/// - 200 (OK): HTML page with the user's claims pretty-printed, or a login link
/// - 500 (Internal Server Error): Session could not be read
pub async fn home(session: Session) -> Result<Html<String>, Error> {
    let user = SessionUser::get(&session).await?;

    Ok(Html(render_home(user.as_ref())?))
}

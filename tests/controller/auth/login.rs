use axum::{extract::State, http::StatusCode, response::IntoResponse};
use sso_portal::server::{
    controller::auth::login,
    model::session::{auth::SessionAuthCsrf, user::SessionUser},
};
use sso_portal_test_utils::{
    constant::{TEST_BASE_URL, TEST_CLIENT_ID},
    fixtures::auth::factory::AUTHORIZE_PATH,
    prelude::*,
};

use crate::util::{location, query_param, TestSetupExt};

#[tokio::test]
/// Test the return of a 307 temporary redirect to the provider's authorization endpoint
async fn redirects_to_authorization_endpoint() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = login(State(test.state()), test.session.clone()).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    let target = location(&resp);
    assert!(target.starts_with(&format!("{}{}?", test.issuer_url(), AUTHORIZE_PATH)));
    assert_eq!(
        query_param(&target, "client_id").as_deref(),
        Some(TEST_CLIENT_ID)
    );
    assert_eq!(
        query_param(&target, "redirect_uri"),
        Some(format!("{}/callback", TEST_BASE_URL))
    );
    assert_eq!(
        query_param(&target, "scope").as_deref(),
        Some("openid profile email")
    );

    Ok(())
}

#[tokio::test]
/// Test that the CSRF state sent to the provider is stored in session
async fn stores_csrf_state_in_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = login(State(test.state()), test.session.clone())
        .await
        .unwrap()
        .into_response();

    let sent_state = query_param(&location(&resp), "state");
    let stored_state = SessionAuthCsrf::get(&test.session).await.unwrap();
    assert_eq!(sent_state, Some(stored_state));

    Ok(())
}

#[tokio::test]
/// Test that login redirects even when a user is already logged in
async fn redirects_with_existing_session() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_session_user(factory::claims("auth0|123", "x@y.com"))
        .build()
        .await?;

    let resp = login(State(test.state()), test.session.clone())
        .await
        .unwrap()
        .into_response();

    assert!(resp.status().is_redirection());
    assert!(location(&resp).starts_with(&test.issuer_url()));
    // Existing login is left untouched until the callback replaces it
    assert!(SessionUser::get(&test.session).await.unwrap().is_some());

    Ok(())
}

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Form,
};
use serde_json::{json, Value};
use sso_portal::server::{
    controller::{
        auth::{callback, callback_form, CallbackParams},
        home::home,
    },
    model::session::{
        auth::{SESSION_AUTH_CSRF_KEY, SESSION_AUTH_PKCE_KEY},
        user::{SessionUser, SESSION_USER_KEY},
    },
    view::home::pretty_json,
};
use sso_portal_test_utils::{constant::TEST_AUTH_CODE, prelude::*};

use crate::util::{location, TestSetupExt};

fn params(state: &str) -> CallbackParams {
    CallbackParams {
        state: state.to_string(),
        code: Some(TEST_AUTH_CODE.to_string()),
        error: None,
        error_description: None,
    }
}

fn denied_params(state: &str) -> CallbackParams {
    CallbackParams {
        state: state.to_string(),
        code: None,
        error: Some("access_denied".to_string()),
        error_description: Some("User did not authorize the request".to_string()),
    }
}

/// Test builder with CSRF state and PKCE verifier stored as if login had been initiated
fn builder() -> TestBuilder {
    TestBuilder::new()
        .with_session_value(SESSION_AUTH_CSRF_KEY, json!("state"))
        .with_session_value(SESSION_AUTH_PKCE_KEY, json!("verifier"))
}

#[tokio::test]
/// Test the return of a 307 redirect to home with the claims stored verbatim in session
async fn stores_claims_and_redirects_home() -> Result<(), TestError> {
    let claims = factory::claims("auth0|123", "x@y.com");
    let test = builder()
        .with_token_endpoint(1)
        .with_userinfo_endpoint(claims.clone(), 1)
        .build()
        .await?;

    let result = callback(State(test.state()), test.session.clone(), Query(params("state"))).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&resp), "/");

    let stored = test.session.get::<Value>(SESSION_USER_KEY).await?;
    assert_eq!(stored, Some(claims));

    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Test that the home page renders the pretty-printed claims after a successful callback
async fn home_renders_claims_after_callback() -> Result<(), TestError> {
    let claims = factory::claims("auth0|123", "x@y.com");
    let test = builder()
        .with_token_endpoint(1)
        .with_userinfo_endpoint(claims.clone(), 1)
        .build()
        .await?;

    callback(State(test.state()), test.session.clone(), Query(params("state")))
        .await
        .unwrap();

    let page = home(test.session.clone()).await.unwrap().0;

    let pretty = pretty_json(&claims).unwrap();
    assert!(pretty.contains("\n    \"sub\": \"auth0|123\""));
    assert!(page.contains(&pretty));

    Ok(())
}

#[tokio::test]
/// Test that a LOGIN event is logged with the subject and email
async fn logs_login_event() -> Result<(), TestError> {
    let test = builder()
        .with_token_endpoint(1)
        .with_userinfo_endpoint(factory::claims("auth0|123", "x@y.com"), 1)
        .build()
        .await?;
    let _guard = test.logs.install();

    callback(State(test.state()), test.session.clone(), Query(params("state")))
        .await
        .unwrap();

    let events = test.logs.with_message("LOGIN");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].field("user_id"), Some("auth0|123"));
    assert_eq!(events[0].field("email"), Some("x@y.com"));
    assert!(events[0].field("timestamp").is_some());

    Ok(())
}

#[tokio::test]
/// Test that a form posted callback behaves like the query callback
async fn accepts_form_post() -> Result<(), TestError> {
    let test = builder()
        .with_token_endpoint(1)
        .with_userinfo_endpoint(factory::claims("auth0|123", "x@y.com"), 1)
        .build()
        .await?;

    let result = callback_form(State(test.state()), test.session.clone(), Form(params("state"))).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert!(SessionUser::get(&test.session).await.unwrap().is_some());

    Ok(())
}

#[tokio::test]
/// Test the return of a 400 bad request for a CSRF state mismatch, without contacting the provider
async fn rejects_state_mismatch() -> Result<(), TestError> {
    let test = builder()
        .with_token_endpoint(0)
        .with_userinfo_endpoint(factory::claims("auth0|123", "x@y.com"), 0)
        .build()
        .await?;

    let result = callback(
        State(test.state()),
        test.session.clone(),
        Query(params("incorrect_state")),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(SessionUser::get(&test.session).await.unwrap().is_none());

    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Test the return of a 500 internal server error when login was never initiated
async fn fails_without_login_state() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = callback(State(test.state()), test.session.clone(), Query(params("state"))).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}

#[tokio::test]
/// Test the return of a 500 internal server error when the provider rejects the code
async fn fails_when_code_exchange_fails() -> Result<(), TestError> {
    let test = builder()
        .with_token_error_endpoint(1)
        .with_userinfo_endpoint(factory::claims("auth0|123", "x@y.com"), 0)
        .build()
        .await?;

    let result = callback(State(test.state()), test.session.clone(), Query(params("state"))).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(SessionUser::get(&test.session).await.unwrap().is_none());

    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Test the return of a 500 internal server error when the userinfo endpoint is unavailable
async fn fails_when_userinfo_unavailable() -> Result<(), TestError> {
    let test = builder()
        .with_token_endpoint(1)
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/userinfo")
                .with_status(503)
                .expect(1)
                .create()
        })
        .build()
        .await?;

    let result = callback(State(test.state()), test.session.clone(), Query(params("state"))).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(SessionUser::get(&test.session).await.unwrap().is_none());

    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Test the return of a logged 500 internal server error when the user denies consent
async fn fails_when_provider_returns_error() -> Result<(), TestError> {
    let test = builder()
        .with_token_endpoint(0)
        .with_userinfo_endpoint(factory::claims("auth0|123", "x@y.com"), 0)
        .build()
        .await?;
    let _guard = test.logs.install();

    let result = callback(
        State(test.state()),
        test.session.clone(),
        Query(denied_params("state")),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(SessionUser::get(&test.session).await.unwrap().is_none());

    let logged = test.logs.with_message(
        "Identity provider did not authorize the login: access_denied: User did not authorize the request",
    );
    assert_eq!(logged.len(), 1);
    assert_eq!(logged[0].level, tracing::Level::ERROR);

    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Test the return of a 400 bad request for a forged error response with the wrong state
async fn rejects_error_response_with_state_mismatch() -> Result<(), TestError> {
    let test = builder().build().await?;

    let result = callback(
        State(test.state()),
        test.session.clone(),
        Query(denied_params("incorrect_state")),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

use sso_portal::server::{controller::home::home, view::home::pretty_json};
use sso_portal_test_utils::prelude::*;

#[tokio::test]
/// Expect the guest page with a login link when nobody is logged in
async fn renders_guest_page() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let page = home(test.session.clone()).await.unwrap().0;

    assert!(page.contains("Welcome Guest"));
    assert!(page.contains("href=\"/login\""));
    assert!(page.contains("<pre>null</pre>"));

    Ok(())
}

#[tokio::test]
/// Expect the user's claims rendered as pretty-printed JSON
async fn renders_user_claims() -> Result<(), TestError> {
    let claims = factory::claims("auth0|123", "x@y.com");
    let test = TestBuilder::new()
        .with_session_user(claims.clone())
        .build()
        .await?;

    let page = home(test.session.clone()).await.unwrap().0;

    assert!(page.contains("Welcome x@y.com!"));
    assert!(page.contains("href=\"/logout\""));
    assert!(page.contains(&pretty_json(&claims).unwrap()));

    Ok(())
}

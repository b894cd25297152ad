use sso_portal::server::oauth::{OAuthClient, ProviderMetadata};
use sso_portal_test_utils::prelude::*;

use crate::util::TestSetupExt;

#[tokio::test]
/// Expect endpoints to be read from the discovery document
async fn discovers_provider_endpoints() -> Result<(), TestError> {
    let test = TestBuilder::new().with_discovery_endpoint(1).build().await?;

    let metadata = ProviderMetadata::discover(&reqwest::Client::new(), &test.issuer_url()).await;

    let metadata = metadata.unwrap();
    assert_eq!(
        metadata.token_endpoint.as_str(),
        format!("{}/oauth/token", test.issuer_url())
    );
    assert_eq!(
        metadata.userinfo_endpoint.as_str(),
        format!("{}/userinfo", test.issuer_url())
    );

    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect an error when the provider has no discovery document
async fn fails_without_discovery_document() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/.well-known/openid-configuration")
                .with_status(404)
                .create()
        })
        .build()
        .await?;

    let result = ProviderMetadata::discover(&reqwest::Client::new(), &test.issuer_url()).await;

    assert!(result.is_err());

    Ok(())
}

#[tokio::test]
/// Expect the client built from discovery to target the discovered authorization endpoint
async fn builds_client_from_discovery() -> Result<(), TestError> {
    let test = TestBuilder::new().with_discovery_endpoint(1).build().await?;

    let client = OAuthClient::discover(test.settings()).await.unwrap();

    let login = client.login_url(vec!["openid".to_string()]);
    assert!(login
        .login_url
        .starts_with(&format!("{}/authorize?", test.issuer_url())));

    test.assert_mocks();

    Ok(())
}

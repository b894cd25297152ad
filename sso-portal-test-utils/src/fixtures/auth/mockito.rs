//! Mock HTTP endpoints simulating the identity provider.

use mockito::{Matcher, Mock};

use crate::{
    constant::TEST_ACCESS_TOKEN,
    fixtures::auth::{
        factory::{self, DISCOVERY_PATH, TOKEN_PATH, USERINFO_PATH},
        AuthFixtures,
    },
};

impl<'a> AuthFixtures<'a> {
    /// Create the OpenID Connect discovery endpoint.
    pub fn create_discovery_endpoint(&mut self, expected_requests: usize) -> Mock {
        let document = factory::discovery_document(&self.setup.issuer_url());

        self.setup
            .server
            .mock("GET", DISCOVERY_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(document.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a token endpoint accepting the authorization code grant.
    pub fn create_token_endpoint(&mut self, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("POST", TOKEN_PATH)
            .match_body(Matcher::Regex("grant_type=authorization_code".to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(factory::token_response().to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a token endpoint rejecting every code with `invalid_grant`.
    pub fn create_token_error_endpoint(&mut self, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("POST", TOKEN_PATH)
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(factory::token_error_response().to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a userinfo endpoint returning `claims` for the mock access token.
    pub fn create_userinfo_endpoint(
        &mut self,
        claims: serde_json::Value,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", USERINFO_PATH)
            .match_header(
                "authorization",
                Matcher::Exact(format!("Bearer {}", TEST_ACCESS_TOKEN)),
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(claims.to_string())
            .expect(expected_requests)
            .create()
    }
}

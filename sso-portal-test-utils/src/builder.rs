//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use mockito::Mock;
use serde_json::Value;

use crate::{constant::TEST_SESSION_USER_KEY, error::TestError, TestSetup};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with mock identity provider endpoints
/// and session fixtures. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Session fixtures to insert
    session_user: Option<Value>,
    session_values: Vec<(String, Value)>,

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    // Pre-configured endpoint shortcuts
    discovery_endpoints: Vec<usize>,
    token_endpoints: Vec<usize>,
    token_error_endpoints: Vec<usize>,
    userinfo_endpoints: Vec<(Value, usize)>,
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no session fixtures or mock endpoints configured.
    pub fn new() -> Self {
        Self {
            session_user: None,
            session_values: Vec::new(),
            mock_builders: Vec::new(),
            discovery_endpoints: Vec::new(),
            token_endpoints: Vec::new(),
            token_error_endpoints: Vec::new(),
            userinfo_endpoints: Vec::new(),
        }
    }

    /// Store `claims` as the authenticated user of the test session.
    pub fn with_session_user(mut self, claims: Value) -> Self {
        self.session_user = Some(claims);
        self
    }

    /// Store an arbitrary value in the test session.
    pub fn with_session_value(mut self, key: impl Into<String>, value: Value) -> Self {
        self.session_values.push((key.into(), value));
        self
    }

    /// Add the OpenID Connect discovery endpoint to the mock provider.
    ///
    /// # Arguments
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_discovery_endpoint(mut self, expected_requests: usize) -> Self {
        self.discovery_endpoints.push(expected_requests);
        self
    }

    /// Add a token endpoint issuing the mock access token.
    ///
    /// # Arguments
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_token_endpoint(mut self, expected_requests: usize) -> Self {
        self.token_endpoints.push(expected_requests);
        self
    }

    /// Add a token endpoint rejecting the authorization code.
    ///
    /// # Arguments
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_token_error_endpoint(mut self, expected_requests: usize) -> Self {
        self.token_error_endpoints.push(expected_requests);
        self
    }

    /// Add a userinfo endpoint returning `claims` for the mock access token.
    ///
    /// # Arguments
    /// - `claims` - JSON claims object returned by the endpoint
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_userinfo_endpoint(mut self, claims: Value, expected_requests: usize) -> Self {
        self.userinfo_endpoints.push((claims, expected_requests));
        self
    }

    /// Add a custom mock endpoint with full control.
    ///
    /// Allows complete customization of mock endpoint behavior by providing direct access
    /// to the mockito ServerGuard. Use this for endpoints not covered by helper methods.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test setup by inserting session fixtures and creating mock endpoints.
    ///
    /// # Returns
    /// - `Ok(TestSetup)` - Fully configured test environment ready for use
    /// - `Err(TestError::SessionError)` - A session fixture could not be stored
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let mut setup = TestSetup::new().await?;

        // 1. Insert session fixtures
        if let Some(claims) = self.session_user {
            setup.session.insert(TEST_SESSION_USER_KEY, claims).await?;
        }

        for (key, value) in self.session_values {
            setup.session.insert(&key, value).await?;
        }

        // 2. Create mock endpoints
        // Custom endpoints are created first so they take precedence in mockito matching
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for expected in self.discovery_endpoints {
            mocks.push(setup.auth().create_discovery_endpoint(expected));
        }

        for expected in self.token_endpoints {
            mocks.push(setup.auth().create_token_endpoint(expected));
        }

        for expected in self.token_error_endpoints {
            mocks.push(setup.auth().create_token_error_endpoint(expected));
        }

        for (claims, expected) in self.userinfo_endpoints {
            mocks.push(setup.auth().create_userinfo_endpoint(claims, expected));
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

use std::sync::Arc;

use mockito::{Mock, Server, ServerGuard};
use tower_sessions::{MemoryStore, Session};

use crate::{error::TestError, logs::LogCapture};

/// Name of the cookie carrying the session ID.
pub static SESSION_COOKIE_NAME: &str = "id";

pub struct TestSetup {
    /// Mock server impersonating the identity provider.
    pub server: ServerGuard,
    /// Store backing `session`, shared with any session layer built for the test.
    pub store: MemoryStore,
    pub session: Session,
    pub mocks: Vec<Mock>,
    pub logs: LogCapture,
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;

        let store = MemoryStore::default();
        let session = Session::new(None, Arc::new(store.clone()), None);

        Ok(TestSetup {
            server,
            store,
            session,
            mocks: Vec::new(),
            logs: LogCapture::default(),
        })
    }

    /// Issuer URL of the mock identity provider.
    pub fn issuer_url(&self) -> String {
        self.server.url()
    }

    /// Persist the test session to the store and return a `Cookie` header value for it.
    ///
    /// Requests carrying this header through a plaintext session layer built on
    /// [`TestSetup::store`] observe the same session data as [`TestSetup::session`].
    pub async fn session_cookie(&self) -> Result<String, TestError> {
        self.session.save().await?;

        let id = self
            .session
            .id()
            .map(|id| id.to_string())
            .unwrap_or_default();

        Ok(format!("{}={}", SESSION_COOKIE_NAME, id))
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}

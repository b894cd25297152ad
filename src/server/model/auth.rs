use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identity claims returned by the provider's userinfo endpoint.
///
/// The provider's claims object is kept as a single map, in the provider's key order, so it
/// round-trips through the session unchanged. Only `sub` is checked on deserialization: it
/// must be present and a string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct IdentityClaims(Map<String, Value>);

impl TryFrom<Map<String, Value>> for IdentityClaims {
    type Error = String;

    fn try_from(claims: Map<String, Value>) -> Result<Self, Self::Error> {
        match claims.get("sub") {
            Some(Value::String(_)) => Ok(Self(claims)),
            Some(_) => Err("claim `sub` must be a string".to_string()),
            None => Err("missing claim `sub`".to_string()),
        }
    }
}

impl From<IdentityClaims> for Map<String, Value> {
    fn from(claims: IdentityClaims) -> Self {
        claims.0
    }
}

impl IdentityClaims {
    /// Stable subject identifier.
    pub fn sub(&self) -> &str {
        self.claim("sub").unwrap_or_default()
    }

    /// `email` claim, when the provider supplied it as a string.
    pub fn email(&self) -> Option<&str> {
        self.claim("email")
    }

    /// Email claim, or an empty string when the provider did not supply one.
    pub fn email_or_empty(&self) -> &str {
        self.email().unwrap_or_default()
    }

    /// Human readable name: the `name` claim, falling back to `email`, then `sub`.
    pub fn display_name(&self) -> &str {
        self.claim("name").or(self.email()).unwrap_or(self.sub())
    }

    /// The full claims object.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    fn claim(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }
}

/// Data produced when initiating a login with the identity provider.
#[derive(Debug)]
pub struct AuthenticationData {
    /// Authorization endpoint URL the browser is redirected to.
    pub login_url: String,
    /// CSRF state round-tripped through the provider.
    pub state: String,
    /// PKCE verifier matching the challenge embedded in `login_url`.
    pub pkce_verifier: String,
}

//! Factories for identity provider payloads.

use serde_json::{json, Value};

use crate::constant::TEST_ACCESS_TOKEN;

/// Path of the mock authorization endpoint.
pub static AUTHORIZE_PATH: &str = "/authorize";

/// Path of the mock token endpoint.
pub static TOKEN_PATH: &str = "/oauth/token";

/// Path of the mock userinfo endpoint.
pub static USERINFO_PATH: &str = "/userinfo";

/// Path of the discovery document.
pub static DISCOVERY_PATH: &str = "/.well-known/openid-configuration";

/// Userinfo claims with the given subject and email.
pub fn claims(sub: &str, email: &str) -> Value {
    json!({
        "sub": sub,
        "email": email,
    })
}

/// Discovery document pointing every endpoint at `issuer_url`.
pub fn discovery_document(issuer_url: &str) -> Value {
    json!({
        "issuer": format!("{}/", issuer_url),
        "authorization_endpoint": format!("{}{}", issuer_url, AUTHORIZE_PATH),
        "token_endpoint": format!("{}{}", issuer_url, TOKEN_PATH),
        "userinfo_endpoint": format!("{}{}", issuer_url, USERINFO_PATH),
        "response_types_supported": ["code"],
        "scopes_supported": ["openid", "profile", "email"],
    })
}

/// Successful token endpoint response.
pub fn token_response() -> Value {
    json!({
        "access_token": TEST_ACCESS_TOKEN,
        "token_type": "Bearer",
        "expires_in": 86400,
        "scope": "openid profile email",
        "id_token": "header.payload.signature",
    })
}

/// Token endpoint error response for a rejected code.
pub fn token_error_response() -> Value {
    json!({
        "error": "invalid_grant",
        "error_description": "Invalid authorization code",
    })
}

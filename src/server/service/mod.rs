//! Service layer.
//!
//! Services contain the authentication flow logic between HTTP controllers and the OAuth
//! client adapter.

pub mod auth;

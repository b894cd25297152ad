//! SSO portal: a small web application delegating sign-in to an OpenID Connect provider.

pub mod model;
pub mod server;

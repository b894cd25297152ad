//! Request middleware.
//!
//! This module contains the access guard composed in front of protected routes and the
//! router-wide handler applied to every 401 response.

pub mod auth;
pub mod unauthorized;

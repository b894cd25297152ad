//! HTTP controller endpoints for the portal.
//!
//! This module contains Axum handlers for the sign-in flow, the public home page and the
//! protected page. Controllers read and write the typed session records through tower-sessions
//! and delegate the OAuth work to the service layer.

pub mod auth;
pub mod home;
pub mod protected;
pub mod util;

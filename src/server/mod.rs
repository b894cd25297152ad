//! Server application core modules.
//!
//! This module contains all server-side functionality for the portal, including HTTP routing,
//! the OAuth2 / OpenID Connect client adapter, typed session storage, the access guard
//! middleware and startup wiring. Request handlers receive an explicit [`model::app::AppState`]
//! built once at startup instead of relying on ambient global state.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod error;
pub mod middleware;
pub mod model;
pub mod oauth;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
pub mod view;

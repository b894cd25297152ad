//! Authentication service layer.
//!
//! This module contains the logic for the OpenID Connect sign-in flow: login URL generation and
//! callback processing (code exchange followed by the userinfo lookup).

pub mod callback;
pub mod login;

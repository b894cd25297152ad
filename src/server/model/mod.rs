//! Server application models and type definitions.
//!
//! This module contains data models for the server application, including the application
//! state shared with request handlers, identity claims returned by the provider and the typed
//! session records.

pub mod app;
pub mod auth;
pub mod session;

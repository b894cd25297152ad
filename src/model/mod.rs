//! Data transfer types shared by HTTP responses.

pub mod api;

//! HTML rendering for server-rendered pages.

pub mod home;

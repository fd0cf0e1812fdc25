//! Request extractors shared by all routes.

pub mod auth;

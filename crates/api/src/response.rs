//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope per project
//! conventions. Use [`DataResponse`] instead of ad-hoc
//! `serde_json::json!({ "data": ... })` to get compile-time type safety
//! and consistent serialization.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: lists }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Body returned by delete endpoints that respond 200 with confirmation
/// rather than 204.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

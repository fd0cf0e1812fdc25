//! Request-body extraction with boundary validation.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// `Json<T>` that also runs the payload's `Validate` rules.
///
/// Handlers receive only well-formed, validated DTOs; malformed JSON and
/// constraint violations are both rejected before any handler code runs.
/// Deserialization failures map to 400 (`BAD_REQUEST`), validation
/// failures to 400 with per-field detail (`VALIDATION_ERROR`).
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|err: JsonRejection| AppError::BadRequest(err.body_text()))?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}

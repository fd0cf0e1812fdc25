//! Handlers for list CRUD.
//!
//! Every operation that touches an existing list goes through
//! [`authorize_list`] first; creation and listing are scoped to the
//! caller's identity directly.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use watchlist_core::error::CoreError;
use watchlist_core::types::DbId;
use watchlist_db::models::list::{CreateList, UpdateList};
use watchlist_db::repositories::ListRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::guard::authorize_list;
use crate::middleware::auth::AuthUser;
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// GET /api/v1/lists
///
/// All lists owned by the authenticated caller. An empty result is a
/// 200 with an empty array, never an error.
pub async fn list_lists(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let lists = ListRepo::list_by_owner(&state.pool, &user.user_id).await?;

    Ok(Json(DataResponse { data: lists }))
}

/// POST /api/v1/lists
///
/// Create a list owned by the caller. Id and timestamps are assigned by
/// the database.
pub async fn create_list(
    user: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateList>,
) -> AppResult<impl IntoResponse> {
    let list = ListRepo::create(&state.pool, &user.user_id, &input).await?;

    tracing::info!(list_id = %list.id, user_id = %user.user_id, "List created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: list })))
}

/// PUT /api/v1/lists/{list_id}
///
/// Partially update a list's name and/or description. The owner column
/// is never written; `updated_at` is refreshed.
pub async fn update_list(
    user: AuthUser,
    State(state): State<AppState>,
    Path(list_id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateList>,
) -> AppResult<impl IntoResponse> {
    // An update with neither field is a no-op; reject it before touching
    // storage, like any other malformed payload.
    if input.name.is_none() && input.description.is_none() {
        return Err(AppError::Core(CoreError::Validation(
            "At least one field (name or description) must be provided".into(),
        )));
    }

    authorize_list(&state.pool, list_id, &user.user_id).await?;

    // The guard just saw the row, so a miss here means a concurrent
    // delete won the race; report it the same way as a stale id.
    let list = ListRepo::update(&state.pool, list_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "List",
            id: list_id,
        }))?;

    tracing::info!(list_id = %list.id, user_id = %user.user_id, "List updated");

    Ok(Json(DataResponse { data: list }))
}

/// DELETE /api/v1/lists/{list_id}
///
/// Delete a list; the storage-level cascade removes all child items in
/// the same statement.
pub async fn delete_list(
    user: AuthUser,
    State(state): State<AppState>,
    Path(list_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    authorize_list(&state.pool, list_id, &user.user_id).await?;

    ListRepo::delete(&state.pool, list_id).await?;

    tracing::info!(list_id = %list_id, user_id = %user.user_id, "List deleted");

    Ok(Json(DataResponse {
        data: MessageResponse {
            message: "List deleted successfully",
        },
    }))
}

//! Handlers for items within a list.
//!
//! Items have no owner of their own: every operation authorizes the
//! parent list first, then acts on rows scoped to that list.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use watchlist_core::error::CoreError;
use watchlist_core::types::DbId;
use watchlist_db::models::list_item::CreateListItem;
use watchlist_db::repositories::ListItemRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::guard::authorize_list;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/lists/{list_id}/items
///
/// All items in the list, once the caller's ownership is verified.
pub async fn list_items(
    user: AuthUser,
    State(state): State<AppState>,
    Path(list_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    authorize_list(&state.pool, list_id, &user.user_id).await?;

    let items = ListItemRepo::list_by_list(&state.pool, list_id).await?;

    Ok(Json(DataResponse { data: items }))
}

/// POST /api/v1/lists/{list_id}/items
///
/// Add an item to the list. Duplicate `movie_id`s within a list are
/// allowed.
pub async fn create_item(
    user: AuthUser,
    State(state): State<AppState>,
    Path(list_id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<CreateListItem>,
) -> AppResult<impl IntoResponse> {
    authorize_list(&state.pool, list_id, &user.user_id).await?;

    let item = ListItemRepo::create(&state.pool, list_id, &input).await?;

    tracing::info!(
        item_id = %item.id,
        list_id = %list_id,
        movie_id = item.movie_id,
        user_id = %user.user_id,
        "List item created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

/// DELETE /api/v1/lists/{list_id}/items/{item_id}
///
/// Remove an item from the list. The lookup is constrained by both the
/// item id and the list id, so an item belonging to a different list --
/// even one the caller owns -- is NotFound here.
pub async fn delete_item(
    user: AuthUser,
    State(state): State<AppState>,
    Path((list_id, item_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    authorize_list(&state.pool, list_id, &user.user_id).await?;

    let item = ListItemRepo::find_in_list(&state.pool, item_id, list_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ListItem",
            id: item_id,
        }))?;

    ListItemRepo::delete(&state.pool, item.id).await?;

    tracing::info!(
        item_id = %item.id,
        list_id = %list_id,
        user_id = %user.user_id,
        "List item deleted",
    );

    Ok(StatusCode::NO_CONTENT)
}

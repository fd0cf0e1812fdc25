pub mod health;
pub mod list_items;
pub mod lists;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /lists                               list, create
/// /lists/{list_id}                     update, delete
/// /lists/{list_id}/items               list, create
/// /lists/{list_id}/items/{item_id}     delete
/// ```
///
/// All routes require a Bearer token; the caller identity scopes every
/// operation.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/lists", lists::router())
        .nest("/lists/{list_id}/items", list_items::router())
}

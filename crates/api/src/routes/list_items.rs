//! Route definitions for items, mounted at `/lists/{list_id}/items`.
//!
//! ```text
//! GET    /            -> list_items
//! POST   /            -> create_item
//! DELETE /{item_id}   -> delete_item
//! ```

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::list_items;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_items::list_items).post(list_items::create_item),
        )
        .route("/{item_id}", delete(list_items::delete_item))
}

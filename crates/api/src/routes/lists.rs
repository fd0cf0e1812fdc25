//! Route definitions for list CRUD, mounted at `/lists`.
//!
//! ```text
//! GET    /            -> list_lists
//! POST   /            -> create_list
//! PUT    /{list_id}   -> update_list
//! DELETE /{list_id}   -> delete_list
//! ```

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::lists;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(lists::list_lists).post(lists::create_list))
        .route(
            "/{list_id}",
            put(lists::update_list).delete(lists::delete_list),
        )
}

//! Ownership-authorization guard.
//!
//! Every list and item operation starts here: load the list, check the
//! owner, hand the row back. Item-level authorization is always derived
//! transitively from list ownership -- items carry no owner of their own.

use watchlist_core::error::CoreError;
use watchlist_core::ownership::ensure_list_owner;
use watchlist_core::types::DbId;
use watchlist_db::models::list::List;
use watchlist_db::repositories::ListRepo;
use watchlist_db::DbPool;

use crate::error::AppError;

/// Load a list and verify that `caller_id` owns it.
///
/// - `NotFound` if no list exists with that id.
/// - `Forbidden` if the list's owner is not `caller_id`.
///
/// On success the loaded row is returned so callers do not reload it.
/// No side effects; the check-then-act pair is not wrapped in a
/// transaction, so a concurrent delete between this load and the
/// caller's mutation surfaces as a storage-level miss, not corruption.
pub async fn authorize_list(
    pool: &DbPool,
    list_id: DbId,
    caller_id: &str,
) -> Result<List, AppError> {
    let list = ListRepo::find_by_id(pool, list_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "List",
            id: list_id,
        }))?;

    ensure_list_owner(&list.user_id, caller_id)?;

    Ok(list)
}

//! List model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use watchlist_core::types::{DbId, Timestamp};

/// A row from the `lists` table.
///
/// `user_id` is the opaque owner identity recorded at creation time and
/// never changes afterwards.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct List {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub user_id: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new list.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateList {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,
    #[validate(length(max = 1000, message = "Description is too long"))]
    pub description: Option<String>,
}

/// DTO for a partial list update. Only supplied fields change; the owner
/// is never touched. The "at least one field present" rule is enforced
/// by the handler, not here.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateList {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 1000, message = "Description is too long"))]
    pub description: Option<String>,
}

//! Repository for the `lists` table.

use sqlx::PgPool;
use watchlist_core::types::DbId;

use crate::models::list::{CreateList, List, UpdateList};

/// Column list for `lists` queries.
const LIST_COLUMNS: &str = "id, name, description, user_id, created_at, updated_at";

/// CRUD operations for lists.
pub struct ListRepo;

impl ListRepo {
    /// All lists owned by the given identity, storage order.
    pub async fn list_by_owner(pool: &PgPool, user_id: &str) -> Result<Vec<List>, sqlx::Error> {
        let query = format!("SELECT {LIST_COLUMNS} FROM lists WHERE user_id = $1");
        sqlx::query_as::<_, List>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Find a list by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<List>, sqlx::Error> {
        let query = format!("SELECT {LIST_COLUMNS} FROM lists WHERE id = $1");
        sqlx::query_as::<_, List>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new list owned by `user_id`. Id and timestamps are
    /// assigned by the database.
    pub async fn create(
        pool: &PgPool,
        user_id: &str,
        input: &CreateList,
    ) -> Result<List, sqlx::Error> {
        let query = format!(
            "INSERT INTO lists (name, description, user_id) \
             VALUES ($1, $2, $3) \
             RETURNING {LIST_COLUMNS}"
        );
        sqlx::query_as::<_, List>(&query)
            .bind(&input.name)
            .bind(input.description.as_deref())
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Partially update a list's `name` and/or `description` and refresh
    /// `updated_at`. The owner column is never written.
    ///
    /// Returns `None` if no list with the given ID exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateList,
    ) -> Result<Option<List>, sqlx::Error> {
        let query = format!(
            "UPDATE lists SET \
                 name = COALESCE($2, name), \
                 description = COALESCE($3, description), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {LIST_COLUMNS}"
        );
        sqlx::query_as::<_, List>(&query)
            .bind(id)
            .bind(input.name.as_deref())
            .bind(input.description.as_deref())
            .fetch_optional(pool)
            .await
    }

    /// Delete a list by ID. The `ON DELETE CASCADE` constraint removes
    /// all child items in the same statement.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM lists WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

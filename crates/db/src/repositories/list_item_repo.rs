//! Repository for the `list_items` table.

use sqlx::PgPool;
use watchlist_core::types::DbId;

use crate::models::list_item::{CreateListItem, ListItem};

/// Column list for `list_items` queries.
const ITEM_COLUMNS: &str = "\
    id, list_id, movie_id, movie_title, movie_poster_path, \
    movie_release_date, movie_vote_average, media_type, added_at";

/// CRUD operations for list items.
pub struct ListItemRepo;

impl ListItemRepo {
    /// All items belonging to the given list, storage order.
    pub async fn list_by_list(pool: &PgPool, list_id: DbId) -> Result<Vec<ListItem>, sqlx::Error> {
        let query = format!("SELECT {ITEM_COLUMNS} FROM list_items WHERE list_id = $1");
        sqlx::query_as::<_, ListItem>(&query)
            .bind(list_id)
            .fetch_all(pool)
            .await
    }

    /// Find an item constrained by both its own ID and its parent list ID.
    ///
    /// The double predicate is load-bearing: an item ID paired with the
    /// wrong list ID must come back as `None`, not as the row from some
    /// other list.
    pub async fn find_in_list(
        pool: &PgPool,
        id: DbId,
        list_id: DbId,
    ) -> Result<Option<ListItem>, sqlx::Error> {
        let query = format!("SELECT {ITEM_COLUMNS} FROM list_items WHERE id = $1 AND list_id = $2");
        sqlx::query_as::<_, ListItem>(&query)
            .bind(id)
            .bind(list_id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new item into the given list. Id and `added_at` are
    /// assigned by the database. Duplicate `movie_id`s are allowed.
    pub async fn create(
        pool: &PgPool,
        list_id: DbId,
        input: &CreateListItem,
    ) -> Result<ListItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO list_items \
                 (list_id, movie_id, movie_title, movie_poster_path, \
                  movie_release_date, movie_vote_average, media_type) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {ITEM_COLUMNS}"
        );
        sqlx::query_as::<_, ListItem>(&query)
            .bind(list_id)
            .bind(input.movie_id)
            .bind(&input.movie_title)
            .bind(input.movie_poster_path.as_deref())
            .bind(input.movie_release_date.as_deref())
            .bind(input.movie_vote_average.as_deref())
            .bind(&input.media_type)
            .fetch_one(pool)
            .await
    }

    /// Delete an item by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM list_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

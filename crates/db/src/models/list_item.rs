//! List item model and DTO.
//!
//! Items reference movie/TV entries from the external media catalog and
//! are immutable after creation -- there is no update DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use watchlist_core::types::{DbId, Timestamp};

/// A row from the `list_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ListItem {
    pub id: DbId,
    pub list_id: DbId,
    pub movie_id: i32,
    pub movie_title: String,
    pub movie_poster_path: Option<String>,
    pub movie_release_date: Option<String>,
    pub movie_vote_average: Option<String>,
    pub media_type: String,
    pub added_at: Timestamp,
}

/// DTO for adding an item to a list.
///
/// The same `movie_id` may appear multiple times in one list; duplicates
/// are intentionally not rejected.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateListItem {
    #[validate(range(min = 1, message = "Movie ID must be a positive integer"))]
    pub movie_id: i32,
    #[validate(length(min = 1, max = 500, message = "Movie title must be between 1 and 500 characters"))]
    pub movie_title: String,
    #[validate(length(max = 500, message = "Poster path is too long"))]
    pub movie_poster_path: Option<String>,
    #[validate(length(max = 50, message = "Release date is too long"))]
    pub movie_release_date: Option<String>,
    #[validate(length(max = 10, message = "Vote average is too long"))]
    pub movie_vote_average: Option<String>,
    #[validate(length(min = 1, max = 50, message = "Media type must be between 1 and 50 characters"))]
    pub media_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_item() -> CreateListItem {
        CreateListItem {
            movie_id: 42,
            movie_title: "Dune".into(),
            movie_poster_path: None,
            movie_release_date: None,
            movie_vote_average: None,
            media_type: "movie".into(),
        }
    }

    #[test]
    fn valid_item_passes() {
        assert!(valid_item().validate().is_ok());
    }

    #[test]
    fn zero_movie_id_fails() {
        let mut input = valid_item();
        input.movie_id = 0;
        assert!(input.validate().is_err());
    }

    #[test]
    fn negative_movie_id_fails() {
        let mut input = valid_item();
        input.movie_id = -7;
        assert!(input.validate().is_err());
    }

    #[test]
    fn empty_title_fails() {
        let mut input = valid_item();
        input.movie_title = String::new();
        assert!(input.validate().is_err());
    }

    #[test]
    fn empty_media_type_fails() {
        let mut input = valid_item();
        input.media_type = String::new();
        assert!(input.validate().is_err());
    }

    #[test]
    fn overlong_vote_average_fails() {
        let mut input = valid_item();
        input.movie_vote_average = Some("x".repeat(11));
        assert!(input.validate().is_err());
    }
}

//! Repository for the `ratings` table.

use sqlx::PgPool;
use todorate_core::types::{DbId, Uid};

use crate::base::BaseModel;
use crate::models::rating::{CreateRating, Rating};

const COLUMNS: &str = Rating::COLUMNS;

/// Provides create, list and soft-delete operations for ratings.
pub struct RatingRepo;

impl RatingRepo {
    /// Insert a new rating, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateRating) -> Result<Rating, sqlx::Error> {
        let query = format!(
            "INSERT INTO ratings (todo_id, score, comment)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Rating>(&query)
            .bind(input.todo_id)
            .bind(input.score)
            .bind(&input.comment)
            .fetch_one(pool)
            .await
    }

    /// List ratings of a todo, oldest first. Excludes soft-deleted rows.
    pub async fn list_for_todo(pool: &PgPool, todo_id: Uid) -> Result<Vec<Rating>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM ratings
             WHERE todo_id = $1 AND is_deleted = false
             ORDER BY date_created ASC, id ASC"
        );
        sqlx::query_as::<_, Rating>(&query)
            .bind(todo_id)
            .fetch_all(pool)
            .await
    }

    /// Soft-delete a rating by ID. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE ratings SET is_deleted = true, date_modified = GREATEST(NOW(), date_modified)
             WHERE id = $1 AND is_deleted = false",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}

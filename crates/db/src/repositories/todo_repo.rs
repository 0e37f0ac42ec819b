//! Repository for the `todos` table.

use sqlx::PgPool;
use todorate_core::types::Uid;

use crate::base::BaseModel;
use crate::models::todo::{CreateTodo, Todo, UpdateTodo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = Todo::COLUMNS;

/// Provides CRUD and soft-delete operations for todos.
pub struct TodoRepo;

impl TodoRepo {
    /// Insert a new todo, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTodo) -> Result<Todo, sqlx::Error> {
        let query = format!(
            "INSERT INTO todos (title, description)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a todo by ID. Excludes soft-deleted rows.
    pub async fn find_active(pool: &PgPool, id: Uid) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos WHERE id = $1 AND is_deleted = false");
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List todos, most recently created first. Excludes soft-deleted rows.
    pub async fn list(pool: &PgPool) -> Result<Vec<Todo>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM todos WHERE is_deleted = false ORDER BY date_created DESC"
        );
        sqlx::query_as::<_, Todo>(&query).fetch_all(pool).await
    }

    /// Update a todo. Only non-`None` fields in `input` are applied, and
    /// `date_modified` is stamped.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: Uid,
        input: &UpdateTodo,
    ) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!(
            "UPDATE todos SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                is_done = COALESCE($4, is_done),
                date_modified = GREATEST(NOW(), date_modified)
             WHERE id = $1 AND is_deleted = false
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.is_done)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a todo by ID. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: Uid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE todos SET is_deleted = true, date_modified = GREATEST(NOW(), date_modified)
             WHERE id = $1 AND is_deleted = false",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Restore a soft-deleted todo. Returns `true` if a row was restored.
    pub async fn restore(pool: &PgPool, id: Uid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE todos SET is_deleted = false, date_modified = GREATEST(NOW(), date_modified)
             WHERE id = $1 AND is_deleted = true",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Permanently delete a todo and its ratings. Returns `true` if a row was removed.
    pub async fn hard_delete(pool: &PgPool, id: Uid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

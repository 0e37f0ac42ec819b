//! Soft-delete and timestamp bookkeeping shared by every entity table.
//!
//! Concrete row structs embed [`BaseColumns`] (flattened for both `FromRow`
//! and `Serialize`) and implement [`BaseModel`] to get identifier lookup,
//! modification stamping and soft-delete flag handling.
//!
//! Every table using this module carries three columns:
//!
//! | Column          | Type          | Default  |
//! |-----------------|---------------|----------|
//! | `date_created`  | `timestamptz` | `NOW()`  |
//! | `date_modified` | `timestamptz` | `NOW()`  |
//! | `is_deleted`    | `boolean`     | `false`  |
//!
//! `is_deleted` is indexed. Nothing here updates `date_modified` on write;
//! callers stamp it with [`BaseModel::set_modified`] and persist it themselves.
//! Stamps are truncated to microseconds, the resolution of `timestamptz`, so
//! an in-memory row compares equal to its reloaded copy.

use async_trait::async_trait;
use chrono::{SubsecRound, Utc};
use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool};
use todorate_core::error::CoreError;
use todorate_core::types::Timestamp;

/// SQLSTATE class for data exceptions (`22P02` invalid text representation,
/// `22003` numeric value out of range, ...).
const DATA_EXCEPTION_CLASS: &str = "22";

/// Bookkeeping columns embedded in every entity row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow, Serialize)]
pub struct BaseColumns {
    pub date_created: Timestamp,
    pub date_modified: Timestamp,
    pub is_deleted: bool,
}

impl BaseColumns {
    /// Columns for a freshly constructed row: both timestamps set to now,
    /// not deleted.
    pub fn new() -> Self {
        Self::created_at(Utc::now())
    }

    /// Columns for a row constructed at `now`.
    pub fn created_at(now: Timestamp) -> Self {
        let now = now.trunc_subsecs(6);
        Self {
            date_created: now,
            date_modified: now,
            is_deleted: false,
        }
    }

    /// Stamp `date_modified` with the current wall-clock time.
    pub fn set_modified(&mut self) {
        self.set_modified_at(Utc::now());
    }

    /// Stamp `date_modified` with `now`, truncated to microseconds.
    ///
    /// The stored value never moves backwards: it stays at or after both the
    /// previous `date_modified` and `date_created`.
    pub fn set_modified_at(&mut self, now: Timestamp) {
        self.date_modified = now
            .trunc_subsecs(6)
            .max(self.date_modified)
            .max(self.date_created);
    }
}

impl Default for BaseColumns {
    fn default() -> Self {
        Self::new()
    }
}

/// Failure of [`BaseModel::find_by_id_strict`].
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The identifier could not be converted to the table's id column type.
    #[error("Malformed identifier for {table}: {id:?}")]
    MalformedId { table: &'static str, id: String },

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Returns `true` if `err` is a PostgreSQL data exception (SQLSTATE class 22).
pub fn is_data_exception(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err
            .code()
            .as_deref()
            .is_some_and(is_data_exception_code),
        _ => false,
    }
}

fn is_data_exception_code(code: &str) -> bool {
    code.len() == 5 && code.starts_with(DATA_EXCEPTION_CLASS)
}

/// Capability implemented by every entity row that embeds [`BaseColumns`].
#[async_trait]
pub trait BaseModel: for<'r> FromRow<'r, PgRow> + Send + Sync + Unpin + Sized {
    /// Table the entity is stored in.
    const TABLE: &'static str;

    /// Column list selected for this entity, including the base columns.
    const COLUMNS: &'static str;

    /// SQL type of the `id` column. Identifiers are bound as text and cast
    /// to this type on the server.
    const ID_TYPE: &'static str;

    fn base(&self) -> &BaseColumns;

    fn base_mut(&mut self) -> &mut BaseColumns;

    /// Text form of this row's primary key.
    fn id_string(&self) -> String;

    /// Whether the row has been soft-deleted.
    fn is_deleted(&self) -> bool {
        self.base().is_deleted
    }

    /// Stamp `date_modified` with the current time. Does not persist.
    fn set_modified(&mut self) {
        self.base_mut().set_modified();
    }

    /// Flag the row as soft-deleted and stamp it. Does not persist.
    fn mark_deleted(&mut self) {
        self.base_mut().is_deleted = true;
        self.set_modified();
    }

    /// Clear the soft-delete flag and stamp the row. Does not persist.
    fn mark_restored(&mut self) {
        self.base_mut().is_deleted = false;
        self.set_modified();
    }

    /// Find a row by identifier, reporting malformed identifiers separately.
    ///
    /// Soft-deleted rows are returned as well; filtering on `is_deleted` is
    /// left to the repositories.
    async fn find_by_id_strict(pool: &PgPool, id: &str) -> Result<Option<Self>, LookupError> {
        let query = format!(
            "SELECT {} FROM {} WHERE id = CAST($1 AS {}) LIMIT 1",
            Self::COLUMNS,
            Self::TABLE,
            Self::ID_TYPE,
        );
        match sqlx::query_as::<_, Self>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
        {
            Ok(row) => Ok(row),
            Err(err) if is_data_exception(&err) => Err(LookupError::MalformedId {
                table: Self::TABLE,
                id: id.to_string(),
            }),
            Err(err) => Err(LookupError::Database(err)),
        }
    }

    /// Find a row by identifier.
    ///
    /// An identifier the database cannot interpret for the id column (for
    /// example a non-UUID string against a UUID key) yields `Ok(None)`, the
    /// same as a well-formed identifier with no matching row. Use
    /// [`find_by_id_strict`](Self::find_by_id_strict) to tell them apart.
    async fn get_by_id(pool: &PgPool, id: &str) -> Result<Option<Self>, sqlx::Error> {
        match Self::find_by_id_strict(pool, id).await {
            Ok(row) => Ok(row),
            Err(LookupError::MalformedId { table, id }) => {
                tracing::debug!(table, id = %id, "Malformed identifier treated as not found");
                Ok(None)
            }
            Err(LookupError::Database(err)) => Err(err),
        }
    }

    /// Find a row by identifier, treating absence (or a malformed
    /// identifier) as [`CoreError::NotFound`].
    async fn require_by_id(pool: &PgPool, id: &str) -> Result<Self, CoreError> {
        Self::get_by_id(pool, id)
            .await
            .map_err(|e| CoreError::Internal(e.to_string()))?
            .ok_or_else(|| CoreError::NotFound {
                entity: Self::TABLE,
                id: id.to_string(),
            })
    }

    /// Write this row's `date_modified` back to its table, leaving
    /// `is_deleted` untouched. The stored value never moves backwards.
    ///
    /// Returns `true` if a row was updated.
    async fn save_modified(&self, pool: &PgPool) -> Result<bool, sqlx::Error> {
        let query = format!(
            "UPDATE {} SET date_modified = GREATEST($2, date_modified)
             WHERE id = CAST($1 AS {})",
            Self::TABLE,
            Self::ID_TYPE,
        );
        let result = sqlx::query(&query)
            .bind(self.id_string())
            .bind(self.base().date_modified)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Write this row's `is_deleted` flag back to its table together with
    /// its `date_modified` stamp. Call after [`mark_deleted`](Self::mark_deleted)
    /// or [`mark_restored`](Self::mark_restored).
    ///
    /// Returns `true` if a row was updated.
    async fn save_deleted_flag(&self, pool: &PgPool) -> Result<bool, sqlx::Error> {
        let query = format!(
            "UPDATE {} SET is_deleted = $3, date_modified = GREATEST($2, date_modified)
             WHERE id = CAST($1 AS {})",
            Self::TABLE,
            Self::ID_TYPE,
        );
        let base = *self.base();
        let result = sqlx::query(&query)
            .bind(self.id_string())
            .bind(base.date_modified)
            .bind(base.is_deleted)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

//! Rating entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use todorate_core::types::{DbId, Uid};
use validator::Validate;

use crate::base::{BaseColumns, BaseModel};

/// A row from the `ratings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Rating {
    pub id: DbId,
    pub todo_id: Uid,
    /// 1 (worst) to 5 (best).
    pub score: i16,
    pub comment: Option<String>,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub base: BaseColumns,
}

impl BaseModel for Rating {
    const TABLE: &'static str = "ratings";
    const COLUMNS: &'static str =
        "id, todo_id, score, comment, date_created, date_modified, is_deleted";
    const ID_TYPE: &'static str = "bigint";

    fn base(&self) -> &BaseColumns {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseColumns {
        &mut self.base
    }

    fn id_string(&self) -> String {
        self.id.to_string()
    }
}

/// DTO for rating a todo.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRating {
    pub todo_id: Uid,
    #[validate(range(min = 1, max = 5))]
    pub score: i16,
    #[validate(length(max = 2000))]
    pub comment: Option<String>,
}

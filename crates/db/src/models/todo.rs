//! Todo entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use todorate_core::types::Uid;
use validator::Validate;

use crate::base::{BaseColumns, BaseModel};

/// A row from the `todos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Todo {
    pub id: Uid,
    pub title: String,
    pub description: Option<String>,
    pub is_done: bool,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub base: BaseColumns,
}

impl BaseModel for Todo {
    const TABLE: &'static str = "todos";
    const COLUMNS: &'static str =
        "id, title, description, is_done, date_created, date_modified, is_deleted";
    const ID_TYPE: &'static str = "uuid";

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

/// DTO for creating a new todo.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTodo {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
}

/// DTO for updating a todo. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTodo {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    pub is_done: Option<bool>,
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use todorate_core::error::CoreError;

    use super::*;

    #[test]
    fn serializes_base_columns_inline() {
        let todo = Todo {
            id: Uid::nil(),
            title: "Water plants".to_string(),
            description: None,
            is_done: false,
            base: BaseColumns::new(),
        };

        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["title"], "Water plants");
        assert_eq!(json["is_deleted"], false);
        assert!(json["date_created"].is_string());
        assert!(json["date_modified"].is_string());
        assert!(json.get("base").is_none());
    }

    #[test]
    fn create_requires_non_empty_title() {
        let empty = CreateTodo {
            title: String::new(),
            description: None,
        };
        let err = CoreError::from(empty.validate().unwrap_err());
        assert_matches!(err, CoreError::Validation(ref msg) if msg.contains("title"));

        let ok = CreateTodo {
            title: "Buy milk".to_string(),
            description: Some("2 litres".to_string()),
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn update_checks_only_present_fields() {
        assert!(UpdateTodo::default().validate().is_ok());

        let too_long = UpdateTodo {
            title: Some("x".repeat(201)),
            ..Default::default()
        };
        assert!(too_long.validate().is_err());
    }
}

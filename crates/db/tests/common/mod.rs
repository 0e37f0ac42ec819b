#![allow(dead_code)]

use sqlx::PgPool;
use todorate_db::models::rating::{CreateRating, Rating};
use todorate_db::models::todo::{CreateTodo, Todo};
use todorate_db::repositories::{RatingRepo, TodoRepo};
use tracing_subscriber::EnvFilter;

/// Install a test subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "todorate_db=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

pub fn new_todo(title: &str) -> CreateTodo {
    CreateTodo {
        title: title.to_string(),
        description: None,
    }
}

pub async fn create_todo(pool: &PgPool, title: &str) -> Todo {
    TodoRepo::create(pool, &new_todo(title)).await.unwrap()
}

pub async fn create_rating(pool: &PgPool, todo: &Todo, score: i16) -> Rating {
    RatingRepo::create(
        pool,
        &CreateRating {
            todo_id: todo.id,
            score,
            comment: None,
        },
    )
    .await
    .unwrap()
}

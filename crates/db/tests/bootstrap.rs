use sqlx::PgPool;
use todorate_db::DbConfig;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    todorate_db::health_check(&pool).await.unwrap();

    for table in ["todos", "ratings"] {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// Migrations applied through `run_migrations` on an empty database.
#[sqlx::test(migrations = false)]
async fn test_run_migrations_creates_tables(pool: PgPool) {
    for table in ["todos", "ratings"] {
        let exists: (Option<String>,) = sqlx::query_as("SELECT to_regclass($1)::text")
            .bind(table)
            .fetch_one(&pool)
            .await
            .unwrap();
        assert!(exists.0.is_none(), "{table} should not exist before migrating");
    }

    todorate_db::run_migrations(&pool).await.unwrap();
    // A second run finds nothing pending.
    todorate_db::run_migrations(&pool).await.unwrap();

    for table in ["todos", "ratings"] {
        let exists: (Option<String>,) = sqlx::query_as("SELECT to_regclass($1)::text")
            .bind(table)
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(exists.0.as_deref(), Some(table), "{table} should exist");
    }
}

/// Pool built from environment configuration connects and answers queries.
#[sqlx::test(migrations = false)]
async fn test_create_pool_from_config(_pool: PgPool) {
    let config = DbConfig::from_env().expect("DATABASE_URL is set for sqlx tests");
    let config = DbConfig {
        max_connections: 2,
        ..config
    };

    let pool = todorate_db::create_pool(&config).await.unwrap();
    todorate_db::health_check(&pool).await.unwrap();

    assert_eq!(pool.options().get_max_connections(), 2);
    pool.close().await;
}

//! Database configuration loaded from environment variables.

/// Errors raised while reading [`DbConfig`] from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} must be a positive integer, got {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Connection settings for the PostgreSQL pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    /// Connection string (`DATABASE_URL`).
    pub database_url: String,
    /// Pool size (`DB_MAX_CONNECTIONS`, default: `20`).
    pub max_connections: u32,
}

impl DbConfig {
    pub const DEFAULT_MAX_CONNECTIONS: u32 = 20;

    /// Load configuration from the process environment, reading a `.env`
    /// file first if one exists.
    ///
    /// | Env Var              | Default    |
    /// |----------------------|------------|
    /// | `DATABASE_URL`       | (required) |
    /// | `DB_MAX_CONNECTIONS` | `20`       |
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            None => Self::DEFAULT_MAX_CONNECTIONS,
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "DB_MAX_CONNECTIONS",
                        value: raw,
                    })
                }
            },
        };

        Ok(Self {
            database_url,
            max_connections,
        })
    }
}

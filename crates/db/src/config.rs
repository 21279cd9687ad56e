//! Connection settings sourced from `DB_*` environment variables.

use sqlx::postgres::PgConnectOptions;

use crate::DbError;

pub const DB_HOST: &str = "DB_HOST";
pub const DB_PORT: &str = "DB_PORT";
pub const DB_USERNAME: &str = "DB_USERNAME";
pub const DB_PASSWORD: &str = "DB_PASSWORD";
pub const DB_NAME: &str = "DB_NAME";

/// Everything needed to open a Postgres connection.
///
/// Build it once at start-up with [`DbConfig::from_env`] and hand it to
/// [`crate::ConnectionProvider::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: "localhost".into(),
            port: 5432,
            username: "postgres".into(),
            password: "postgres".into(),
            database: "postgres".into(),
        }
    }
}

impl DbConfig {
    /// Read the process environment. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, DbError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup, falling back to [`Default`] for
    /// any key that returns `None`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DbError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup(DB_PORT) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| DbError::Config(format!("invalid {DB_PORT} '{raw}': {e}")))?,
            None => defaults.port,
        };

        Ok(Self {
            host: lookup(DB_HOST).unwrap_or(defaults.host),
            port,
            username: lookup(DB_USERNAME).unwrap_or(defaults.username),
            password: lookup(DB_PASSWORD).unwrap_or(defaults.password),
            database: lookup(DB_NAME).unwrap_or(defaults.database),
        })
    }

    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .password(&self.password)
            .database(&self.database)
    }
}

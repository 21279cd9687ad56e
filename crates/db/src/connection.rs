//! One-connection-per-call Postgres connection provider.
//!
//! Every repository call opens its own connection with
//! [`ConnectionProvider::get_connection`] and hands it back through
//! [`release`] once the statement result is known.

use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::{ConnectOptions, Connection};
use tracing::{debug, warn};

use crate::{DbConfig, DbError};

/// Opens fresh connections from fixed connect options.
#[derive(Debug, Clone)]
pub struct ConnectionProvider {
    options: PgConnectOptions,
}

impl ConnectionProvider {
    pub fn new(config: &DbConfig) -> Self {
        Self::from_options(config.connect_options())
    }

    /// Use pre-built options, e.g. the ones handed out by `#[sqlx::test]`.
    pub fn from_options(options: PgConnectOptions) -> Self {
        Self { options }
    }

    /// Open a new live connection. The caller owns it and must close it.
    ///
    /// No retry and no reachability probe: whatever `connect` raises is
    /// returned as-is.
    pub async fn get_connection(&self) -> Result<PgConnection, DbError> {
        debug!(
            host = self.options.get_host(),
            port = self.options.get_port(),
            database = self.options.get_database().unwrap_or_default(),
            "Opening database connection"
        );
        let conn = self.options.connect().await?;
        Ok(conn)
    }
}

/// Close `conn` and return the statement `result`.
///
/// The connection is closed whether or not the statement succeeded. A
/// statement error wins over a close error.
pub(crate) async fn release<T>(
    conn: PgConnection,
    result: Result<T, sqlx::Error>,
) -> Result<T, DbError> {
    let closed = conn.close().await;
    let value = result?;
    if let Err(e) = closed {
        warn!("Failed to close database connection: {e}");
        return Err(e.into());
    }
    Ok(value)
}

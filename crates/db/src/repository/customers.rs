//! Customer table operations.
//!
//! Writes run in a transaction that is committed before the connection is
//! released. Reads run straight on the connection.

use sqlx::postgres::{PgArguments, PgConnection};
use sqlx::query::Query;
use sqlx::{Connection, Postgres};
use tracing::{info, instrument};

use crate::{connection::release, ConnectionProvider, Customer, DbError};

const CREATE_TABLE: &str = r#"
    CREATE TABLE customers (
        id     serial PRIMARY KEY,
        name   varchar NOT NULL,
        email  varchar NOT NULL UNIQUE
    )
"#;

/// Create the `customers` table.
///
/// Fails if the table already exists.
#[instrument(skip(db))]
pub async fn create_table(db: &ConnectionProvider) -> Result<(), DbError> {
    execute_committed(db, sqlx::query(CREATE_TABLE)).await?;
    info!("Created customers table");
    Ok(())
}

/// Insert one customer. The id is assigned by the database.
///
/// A duplicate `email` surfaces as a unique-violation [`DbError::Sqlx`].
#[instrument(skip(db, name, email))]
pub async fn create_customer(
    db: &ConnectionProvider,
    name: &str,
    email: &str,
) -> Result<(), DbError> {
    let query = sqlx::query("INSERT INTO customers (name, email) VALUES ($1, $2)")
        .bind(name)
        .bind(email);
    execute_committed(db, query).await?;
    Ok(())
}

/// Return every customer. Row order is whatever the server produces.
#[instrument(skip(db))]
pub async fn get_all_customers(db: &ConnectionProvider) -> Result<Vec<Customer>, DbError> {
    let mut conn = db.get_connection().await?;
    let result = sqlx::query_as::<_, Customer>("SELECT id, name, email FROM customers")
        .fetch_all(&mut conn)
        .await;
    release(conn, result).await
}

/// Fetch the single customer with this email.
///
/// The row is expected to exist; when it doesn't, the error is
/// `sqlx::Error::RowNotFound`.
#[instrument(skip(db, email))]
pub async fn get_customer_by_email(
    db: &ConnectionProvider,
    email: &str,
) -> Result<Customer, DbError> {
    let mut conn = db.get_connection().await?;
    let result = sqlx::query_as::<_, Customer>(
        "SELECT id, name, email FROM customers WHERE email = $1",
    )
    .bind(email)
    .fetch_one(&mut conn)
    .await;
    release(conn, result).await
}

/// Remove every row from `customers`.
#[instrument(skip(db))]
pub async fn delete_all_customers(db: &ConnectionProvider) -> Result<(), DbError> {
    let deleted = execute_committed(db, sqlx::query("DELETE FROM customers")).await?;
    info!(deleted, "Deleted all customers");
    Ok(())
}

// ---------------------------------------------------------------------------
// helpers
// ---------------------------------------------------------------------------

/// Run `query` on a fresh connection inside a committed transaction and
/// return the number of rows affected.
async fn execute_committed(
    db: &ConnectionProvider,
    query: Query<'_, Postgres, PgArguments>,
) -> Result<u64, DbError> {
    let mut conn = db.get_connection().await?;
    let result = execute_in_transaction(&mut conn, query).await;
    release(conn, result).await
}

async fn execute_in_transaction(
    conn: &mut PgConnection,
    query: Query<'_, Postgres, PgArguments>,
) -> Result<u64, sqlx::Error> {
    let mut tx = conn.begin().await?;
    let done = query.execute(&mut *tx).await?;
    tx.commit().await?;
    Ok(done.rows_affected())
}

//! Repository functions — one function per database operation.
//!
//! Every function takes a `&ConnectionProvider`, opens its own connection,
//! and returns a `Result<T, DbError>`. No business logic, pure SQL.

pub mod customers;

//! `db` crate — customer records persistence layer.
//!
//! Provides environment-driven connection configuration, a per-call
//! connection provider, the `Customer` row type, and repository functions
//! for the `customers` table. No pooling, no migrations, no validation.

pub mod config;
pub mod connection;
pub mod error;
pub mod models;
pub mod repository;

pub use config::DbConfig;
pub use connection::ConnectionProvider;
pub use error::DbError;
pub use models::Customer;

//! Row structs that map 1-to-1 onto database tables.

use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// customers
// ---------------------------------------------------------------------------

/// A detached copy of one `customers` row.
///
/// Decoding is by column name; a result set missing `id`, `name` or `email`
/// fails with a decode error instead of producing a partial value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Customer {
    /// Assigned by the `serial` column on insert.
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Customer({}, {}, {})", self.id, self.name, self.email)
    }
}

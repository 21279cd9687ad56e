//! Typed error type for the db crate.

use sqlx::error::ErrorKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    /// Anything raised by the driver or the server, passed through as-is.
    #[error("sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

impl DbError {
    /// `true` when the server rejected a write on a UNIQUE constraint.
    pub fn is_unique_violation(&self) -> bool {
        matches!(self.database_error_kind(), Some(ErrorKind::UniqueViolation))
    }

    /// `true` when the server rejected a write on a NOT NULL constraint.
    pub fn is_not_null_violation(&self) -> bool {
        matches!(self.database_error_kind(), Some(ErrorKind::NotNullViolation))
    }

    /// `true` when a single-row query came back empty.
    pub fn is_row_not_found(&self) -> bool {
        matches!(self, Self::Sqlx(sqlx::Error::RowNotFound))
    }

    fn database_error_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Sqlx(sqlx::Error::Database(err)) => Some(err.kind()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_is_reported_without_remapping() {
        let err = DbError::from(sqlx::Error::RowNotFound);
        assert!(err.is_row_not_found());
        assert!(!err.is_unique_violation());
        assert!(!err.is_not_null_violation());
        assert!(matches!(err, DbError::Sqlx(sqlx::Error::RowNotFound)));
    }

    #[test]
    fn config_error_matches_no_database_kind() {
        let err = DbError::Config("DB_PORT".into());
        assert!(!err.is_row_not_found());
        assert!(!err.is_unique_violation());
        assert_eq!(err.to_string(), "configuration error: DB_PORT");
    }
}

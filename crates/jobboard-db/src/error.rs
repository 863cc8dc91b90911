//! Database error types.

use thiserror::Error;

/// Result type for gateway operations.
pub type DbResult<T> = Result<T, DbError>;

/// Errors that can occur during database operations.
#[derive(Debug, Error)]
pub enum DbError {
    /// A unique index rejected an insert or update (e.g. duplicate email).
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error(transparent)]
    Sqlx(sqlx::Error),
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return DbError::UniqueViolation(db_err.message().to_string());
            }
        }
        DbError::Sqlx(err)
    }
}

impl DbError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, DbError::UniqueViolation(_))
    }
}

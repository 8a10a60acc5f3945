//! Error handling utilities for repositories

use reactions_core::error::DomainError;
use sqlx::Error as SqlxError;

/// SQLSTATE class for data exceptions (bad encoding, out-of-range values)
const DATA_EXCEPTION_CLASS: &str = "22";

/// Convert SQLx error to DomainError
///
/// Values PostgreSQL refuses as malformed are validation errors. Every other
/// driver failure is a storage error, which callers surface as retryable.
pub fn map_db_error(e: SqlxError) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err
            .code()
            .is_some_and(|code| code.starts_with(DATA_EXCEPTION_CLASS))
        {
            return DomainError::InvalidData(db_err.message().to_string());
        }
    }
    DomainError::DatabaseError(e.to_string())
}

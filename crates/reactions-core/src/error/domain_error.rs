//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::IdParseError;

/// Domain layer errors
///
/// Authorization outcomes are not errors here; the service decides them.
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid {field}: {source}")]
    InvalidId {
        field: &'static str,
        #[source]
        source: IdParseError,
    },

    #[error("Invalid emoji name: {0}")]
    InvalidEmojiName(String),

    /// Input the store refused as malformed
    #[error("Invalid data: {0}")]
    InvalidData(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Build an `InvalidId` error for the named field
    pub fn invalid_id(field: &'static str, source: IdParseError) -> Self {
        Self::InvalidId { field, source }
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidId { .. } => "INVALID_ID",
            Self::InvalidEmojiName(_) => "INVALID_EMOJI_NAME",
            Self::InvalidData(_) => "INVALID_DATA",
            Self::DatabaseError(_) => "STORAGE_ERROR",
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidId { .. } | Self::InvalidEmojiName(_) | Self::InvalidData(_)
        )
    }

    /// Check if this is a transient storage failure the caller may retry
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::DatabaseError(_))
    }
}

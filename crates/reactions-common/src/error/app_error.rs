//! Application error types
//!
//! Errors raised outside the reaction service itself: authentication,
//! startup, and infrastructure.

use reactions_core::DomainError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Authentication
    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    // Infrastructure
    #[error("Database error: {0}")]
    Database(String),

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

/// HTTP status for a domain error
///
/// Storage failures are 503 so clients know to retry.
#[must_use]
pub fn domain_status_code(e: &DomainError) -> u16 {
    if e.is_validation() {
        400
    } else if e.is_storage() {
        503
    } else {
        500
    }
}

impl AppError {
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidToken | Self::TokenExpired => 401,
            Self::Database(_) => 503,
            Self::Server(_) | Self::Config(_) | Self::Internal(_) => 500,
        }
    }

    /// Stable code carried in API error bodies
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidToken => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::Database(_) => "STORAGE_ERROR",
            Self::Server(_) | Self::Internal(_) => "INTERNAL_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Whether the caller can expect a retry to succeed
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Database(_))
    }

    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

//! Response DTOs for API endpoints

use chrono::{DateTime, Utc};
use reactions_core::{Reaction, ReactionCount};
use serde::Serialize;

/// A stored reaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReactionResponse {
    pub user_id: String,
    pub post_id: String,
    pub emoji_name: String,
    pub create_at: i64,
}

impl From<Reaction> for ReactionResponse {
    fn from(reaction: Reaction) -> Self {
        Self {
            user_id: reaction.user_id.to_string(),
            post_id: reaction.post_id.to_string(),
            emoji_name: reaction.emoji_name,
            create_at: reaction.create_at,
        }
    }
}

/// Per-emoji reaction count for a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReactionCountResponse {
    pub emoji_name: String,
    pub count: i64,
    /// Whether the requesting user is among the reactors
    pub me: bool,
}

impl From<ReactionCount> for ReactionCountResponse {
    fn from(count: ReactionCount) -> Self {
        Self {
            emoji_name: count.emoji_name,
            count: count.count,
            me: count.me,
        }
    }
}

/// Bare acknowledgement body
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self { status: "OK" }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health of each backing dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub storage: String,
}

impl ReadinessResponse {
    pub fn ready(storage_healthy: bool) -> Self {
        Self {
            status: if storage_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                storage: if storage_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}

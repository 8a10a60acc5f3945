//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Posts and channel membership belong to other
//! subsystems, so only narrow read interfaces are declared for them.

use async_trait::async_trait;

use crate::entities::{Post, Reaction};
use crate::error::DomainError;
use crate::value_objects::Id;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Insert the reaction unless its triple already exists
    ///
    /// Returns the stored row: the new one with `create_at` assigned, or the
    /// pre-existing one unchanged. Must be atomic under concurrent callers.
    async fn save(&self, reaction: &Reaction) -> RepoResult<Reaction>;

    /// Get all reactions for a post in a stable order
    async fn find_by_post(&self, post_id: Id) -> RepoResult<Vec<Reaction>>;

    /// Remove the reaction matching the full triple
    ///
    /// Returns `false` when no row matched.
    async fn delete(&self, reaction: &Reaction) -> RepoResult<bool>;

    /// Check that the backing store is reachable
    async fn ping(&self) -> RepoResult<()>;
}

// ============================================================================
// Post Resolver
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find a live post by ID; deleted posts are reported as absent
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Post>>;
}

// ============================================================================
// Channel Authorization
// ============================================================================

#[async_trait]
pub trait ChannelAuthorizer: Send + Sync {
    /// Whether the user can view the channel and its posts
    async fn can_read(&self, user_id: Id, channel_id: Id) -> RepoResult<bool>;

    /// Whether the user holds manage rights scoped to the channel
    async fn can_manage(&self, user_id: Id, channel_id: Id) -> RepoResult<bool>;
}

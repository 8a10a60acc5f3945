//! Service context - dependency container for services
//!
//! Holds the reaction store and the collaborators used to authorize callers.

use std::sync::Arc;

use reactions_core::traits::{ChannelAuthorizer, PostRepository, ReactionRepository};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cheap to clone; every collaborator is shared behind an `Arc`.
#[derive(Clone)]
pub struct ServiceContext {
    reaction_repo: Arc<dyn ReactionRepository>,
    post_repo: Arc<dyn PostRepository>,
    channel_authorizer: Arc<dyn ChannelAuthorizer>,
}

impl ServiceContext {
    /// Create a new service context
    pub fn new(
        reaction_repo: Arc<dyn ReactionRepository>,
        post_repo: Arc<dyn PostRepository>,
        channel_authorizer: Arc<dyn ChannelAuthorizer>,
    ) -> Self {
        Self {
            reaction_repo,
            post_repo,
            channel_authorizer,
        }
    }

    /// Get the reaction store
    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    /// Get the post resolver
    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    /// Get the channel authorizer
    pub fn channel_authorizer(&self) -> &dyn ChannelAuthorizer {
        self.channel_authorizer.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    reaction_repo: Option<Arc<dyn ReactionRepository>>,
    post_repo: Option<Arc<dyn PostRepository>>,
    channel_authorizer: Option<Arc<dyn ChannelAuthorizer>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reaction_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.reaction_repo = Some(repo);
        self
    }

    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn channel_authorizer(mut self, authorizer: Arc<dyn ChannelAuthorizer>) -> Self {
        self.channel_authorizer = Some(authorizer);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if any dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.reaction_repo
                .ok_or_else(|| ServiceError::internal("reaction_repo is required"))?,
            self.post_repo
                .ok_or_else(|| ServiceError::internal("post_repo is required"))?,
            self.channel_authorizer
                .ok_or_else(|| ServiceError::internal("channel_authorizer is required"))?,
        ))
    }
}

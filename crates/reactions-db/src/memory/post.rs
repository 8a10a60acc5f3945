//! In-memory post resolver

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use reactions_core::entities::Post;
use reactions_core::traits::{PostRepository, RepoResult};
use reactions_core::value_objects::Id;

/// Post lookup seeded by the caller
#[derive(Debug, Default)]
pub struct MemoryPostRepository {
    posts: DashMap<Id, Post>,
}

impl MemoryPostRepository {
    /// Create an empty resolver
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a post
    pub fn insert(&self, post: Post) {
        self.posts.insert(post.id, post);
    }

    /// Soft-delete a post; returns `false` if it was never inserted
    pub fn mark_deleted(&self, id: Id) -> bool {
        match self.posts.get_mut(&id) {
            Some(mut post) => {
                post.delete_at = Utc::now().timestamp_millis();
                true
            }
            None => false,
        }
    }
}

#[async_trait]
impl PostRepository for MemoryPostRepository {
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Post>> {
        Ok(self
            .posts
            .get(&id)
            .filter(|post| !post.is_deleted())
            .map(|post| post.clone()))
    }
}

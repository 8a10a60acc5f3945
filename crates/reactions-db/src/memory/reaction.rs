//! In-memory implementation of ReactionRepository

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::{debug, instrument};

use reactions_core::entities::Reaction;
use reactions_core::error::DomainError;
use reactions_core::traits::{ReactionRepository, RepoResult};
use reactions_core::value_objects::Id;

/// A stored reaction together with its insertion sequence number
#[derive(Debug, Clone)]
struct StoredReaction {
    seq: u64,
    reaction: Reaction,
}

/// Reaction store keyed by `user_id|post_id|emoji_name`
///
/// Listing returns reactions in insertion order.
#[derive(Debug, Default)]
pub struct MemoryReactionRepository {
    reactions: DashMap<String, StoredReaction>,
    next_seq: AtomicU64,
    unavailable: AtomicBool,
}

impl MemoryReactionRepository {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with a storage error, or recover
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of stored reactions
    pub fn len(&self) -> usize {
        self.reactions.len()
    }

    /// Check if the store holds no reactions
    pub fn is_empty(&self) -> bool {
        self.reactions.is_empty()
    }

    fn check_available(&self) -> RepoResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError(
                "reaction store unavailable".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl ReactionRepository for MemoryReactionRepository {
    #[instrument(skip(self, reaction), fields(post_id = %reaction.post_id, emoji = %reaction.emoji_name))]
    async fn save(&self, reaction: &Reaction) -> RepoResult<Reaction> {
        self.check_available()?;
        reaction.validate()?;

        // The entry guard holds the shard lock, so check-and-insert is atomic.
        let entry = self.reactions.entry(reaction.key()).or_insert_with(|| {
            debug!("reaction inserted");
            StoredReaction {
                seq: self.next_seq.fetch_add(1, Ordering::SeqCst),
                reaction: reaction.stamped(),
            }
        });

        Ok(entry.reaction.clone())
    }

    #[instrument(skip(self))]
    async fn find_by_post(&self, post_id: Id) -> RepoResult<Vec<Reaction>> {
        self.check_available()?;

        let mut matching: Vec<StoredReaction> = self
            .reactions
            .iter()
            .filter(|entry| entry.reaction.post_id == post_id)
            .map(|entry| entry.value().clone())
            .collect();
        matching.sort_by_key(|stored| stored.seq);

        Ok(matching.into_iter().map(|stored| stored.reaction).collect())
    }

    #[instrument(skip(self, reaction), fields(post_id = %reaction.post_id, emoji = %reaction.emoji_name))]
    async fn delete(&self, reaction: &Reaction) -> RepoResult<bool> {
        self.check_available()?;
        Ok(self.reactions.remove(&reaction.key()).is_some())
    }

    async fn ping(&self) -> RepoResult<()> {
        self.check_available()
    }
}

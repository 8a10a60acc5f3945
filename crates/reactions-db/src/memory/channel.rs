//! In-memory channel authorizer

use async_trait::async_trait;
use dashmap::DashMap;

use reactions_core::traits::{ChannelAuthorizer, RepoResult};
use reactions_core::value_objects::{Id, Permissions};

/// Channel membership keyed by `(channel_id, user_id)`
#[derive(Debug, Default)]
pub struct MemoryChannelAuthorizer {
    members: DashMap<(Id, Id), Permissions>,
}

impl MemoryChannelAuthorizer {
    /// Create an authorizer with no members
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the user a member of the channel with the given permissions
    pub fn grant(&self, channel_id: Id, user_id: Id, permissions: Permissions) {
        self.members.insert((channel_id, user_id), permissions);
    }

    /// Remove the user from the channel
    pub fn revoke(&self, channel_id: Id, user_id: Id) {
        self.members.remove(&(channel_id, user_id));
    }

    fn permissions(&self, user_id: Id, channel_id: Id) -> Permissions {
        self.members
            .get(&(channel_id, user_id))
            .map(|p| *p)
            .unwrap_or_default()
    }
}

#[async_trait]
impl ChannelAuthorizer for MemoryChannelAuthorizer {
    async fn can_read(&self, user_id: Id, channel_id: Id) -> RepoResult<bool> {
        Ok(self.permissions(user_id, channel_id).can_read())
    }

    async fn can_manage(&self, user_id: Id, channel_id: Id) -> RepoResult<bool> {
        Ok(self.permissions(user_id, channel_id).can_manage())
    }
}

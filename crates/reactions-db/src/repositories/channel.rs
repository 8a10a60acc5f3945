//! PostgreSQL channel authorizer

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use reactions_core::traits::{ChannelAuthorizer, RepoResult};
use reactions_core::value_objects::{Id, Permissions};

use super::error::map_db_error;

/// Answers permission questions from `channel_members.permissions`
///
/// A user without a membership row holds no permissions in the channel.
#[derive(Clone)]
pub struct PgChannelAuthorizer {
    pool: PgPool,
}

impl PgChannelAuthorizer {
    /// Create a new PgChannelAuthorizer
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn permissions(&self, user_id: Id, channel_id: Id) -> RepoResult<Permissions> {
        let bits = sqlx::query_scalar::<_, i64>(
            r"
            SELECT permissions
            FROM channel_members
            WHERE channel_id = $1 AND user_id = $2
            ",
        )
        .bind(channel_id.as_str())
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(bits.map(Permissions::from_i64).unwrap_or_default())
    }
}

#[async_trait]
impl ChannelAuthorizer for PgChannelAuthorizer {
    #[instrument(skip(self))]
    async fn can_read(&self, user_id: Id, channel_id: Id) -> RepoResult<bool> {
        Ok(self.permissions(user_id, channel_id).await?.can_read())
    }

    #[instrument(skip(self))]
    async fn can_manage(&self, user_id: Id, channel_id: Id) -> RepoResult<bool> {
        Ok(self.permissions(user_id, channel_id).await?.can_manage())
    }
}

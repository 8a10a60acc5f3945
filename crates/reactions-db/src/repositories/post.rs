//! PostgreSQL post resolver

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use reactions_core::entities::Post;
use reactions_core::traits::{PostRepository, RepoResult};
use reactions_core::value_objects::Id;

use crate::models::PostModel;

use super::error::map_db_error;

/// Reads live posts from the messaging subsystem's `posts` table
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Create a new PgPostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Post>> {
        let result = sqlx::query_as::<_, PostModel>(
            r"
            SELECT id, channel_id, user_id, create_at, delete_at
            FROM posts
            WHERE id = $1 AND delete_at = 0
            ",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Post::try_from).transpose()
    }
}

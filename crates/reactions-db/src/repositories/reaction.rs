//! PostgreSQL implementation of ReactionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use reactions_core::entities::Reaction;
use reactions_core::traits::{ReactionRepository, RepoResult};
use reactions_core::value_objects::Id;

use crate::mappers::ReactionInsert;
use crate::models::ReactionModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self, reaction), fields(post_id = %reaction.post_id, emoji = %reaction.emoji_name))]
    async fn save(&self, reaction: &Reaction) -> RepoResult<Reaction> {
        reaction.validate()?;

        let stamped = reaction.stamped();
        let insert = ReactionInsert::new(&stamped);

        // The no-op update makes RETURNING yield the existing row on conflict,
        // so concurrent saves of one triple all observe the same create_at.
        let row = sqlx::query_as::<_, ReactionModel>(
            r"
            INSERT INTO reactions (user_id, post_id, emoji_name, create_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (post_id, user_id, emoji_name)
            DO UPDATE SET create_at = reactions.create_at
            RETURNING user_id, post_id, emoji_name, create_at
            ",
        )
        .bind(insert.user_id)
        .bind(insert.post_id)
        .bind(insert.emoji_name)
        .bind(insert.create_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        let saved = Reaction::try_from(row)?;
        debug!(created = saved.create_at == insert.create_at, "reaction saved");
        Ok(saved)
    }

    #[instrument(skip(self))]
    async fn find_by_post(&self, post_id: Id) -> RepoResult<Vec<Reaction>> {
        let results = sqlx::query_as::<_, ReactionModel>(
            r"
            SELECT user_id, post_id, emoji_name, create_at
            FROM reactions
            WHERE post_id = $1
            ORDER BY create_at, user_id, emoji_name
            ",
        )
        .bind(post_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(Reaction::try_from).collect()
    }

    #[instrument(skip(self, reaction), fields(post_id = %reaction.post_id, emoji = %reaction.emoji_name))]
    async fn delete(&self, reaction: &Reaction) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            DELETE FROM reactions WHERE user_id = $1 AND post_id = $2 AND emoji_name = $3
            ",
        )
        .bind(reaction.user_id.as_str())
        .bind(reaction.post_id.as_str())
        .bind(&reaction.emoji_name)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }
}

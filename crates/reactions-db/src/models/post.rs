//! Read-only view of the posts table

use sqlx::FromRow;

/// Columns of `posts` needed to authorize reactions
#[derive(Debug, Clone, FromRow)]
pub struct PostModel {
    pub id: String,
    pub channel_id: String,
    pub user_id: String,
    pub create_at: i64,
    pub delete_at: i64,
}

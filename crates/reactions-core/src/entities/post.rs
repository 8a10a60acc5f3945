//! Post entity - the message a reaction is attached to
//!
//! Posts are owned by the messaging subsystem; this crate only reads them.

use serde::Serialize;

use crate::value_objects::Id;

/// Post entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    pub id: Id,
    pub channel_id: Id,
    pub user_id: Id,
    pub create_at: i64,
    /// Zero while the post is live
    pub delete_at: i64,
}

impl Post {
    /// Create a live post
    pub fn new(id: Id, channel_id: Id, user_id: Id, create_at: i64) -> Self {
        Self {
            id,
            channel_id,
            user_id,
            create_at,
            delete_at: 0,
        }
    }

    /// Check if the post has been deleted
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.delete_at != 0
    }
}

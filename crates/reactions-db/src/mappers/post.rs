//! Post model -> entity mapper

use reactions_core::entities::Post;
use reactions_core::error::DomainError;

use super::reaction::parse_stored_id;
use crate::models::PostModel;

impl TryFrom<PostModel> for Post {
    type Error = DomainError;

    fn try_from(model: PostModel) -> Result<Self, Self::Error> {
        Ok(Post {
            id: parse_stored_id("posts.id", &model.id)?,
            channel_id: parse_stored_id("posts.channel_id", &model.channel_id)?,
            user_id: parse_stored_id("posts.user_id", &model.user_id)?,
            create_at: model.create_at,
            delete_at: model.delete_at,
        })
    }
}

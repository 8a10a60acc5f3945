//! Reaction entity <-> model mapper

use reactions_core::entities::Reaction;
use reactions_core::error::DomainError;
use reactions_core::value_objects::Id;

use crate::models::ReactionModel;

/// Convert ReactionModel to Reaction entity
impl TryFrom<ReactionModel> for Reaction {
    type Error = DomainError;

    fn try_from(model: ReactionModel) -> Result<Self, Self::Error> {
        Ok(Reaction {
            user_id: parse_stored_id("reactions.user_id", &model.user_id)?,
            post_id: parse_stored_id("reactions.post_id", &model.post_id)?,
            emoji_name: model.emoji_name,
            create_at: model.create_at,
        })
    }
}

/// A stored identifier that fails validation means the table is corrupt,
/// not that the caller sent bad input.
pub(crate) fn parse_stored_id(column: &str, value: &str) -> Result<Id, DomainError> {
    Id::parse(value)
        .map_err(|e| DomainError::DatabaseError(format!("malformed {column} {value:?}: {e}")))
}

/// Reaction values bound into an INSERT
pub struct ReactionInsert<'a> {
    pub user_id: &'a str,
    pub post_id: &'a str,
    pub emoji_name: &'a str,
    pub create_at: i64,
}

impl<'a> ReactionInsert<'a> {
    pub fn new(reaction: &'a Reaction) -> Self {
        Self {
            user_id: reaction.user_id.as_str(),
            post_id: reaction.post_id.as_str(),
            emoji_name: &reaction.emoji_name,
            create_at: reaction.create_at,
        }
    }
}

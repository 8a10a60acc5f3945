//! Request DTOs for reaction operations

use serde::Deserialize;
use validator::Validate;

/// Add a reaction to a post
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SaveReactionRequest {
    pub user_id: String,

    pub post_id: String,

    #[validate(length(
        min = 1,
        max = 64,
        message = "emoji_name must be 1-64 characters"
    ))]
    pub emoji_name: String,
}

impl SaveReactionRequest {
    pub fn new(
        user_id: impl Into<String>,
        post_id: impl Into<String>,
        emoji_name: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            post_id: post_id.into(),
            emoji_name: emoji_name.into(),
        }
    }
}

/// Remove a reaction from a post
///
/// An empty emoji name is not a validation failure here: it names no
/// reaction and is reported as not found.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DeleteReactionRequest {
    pub user_id: String,

    pub post_id: String,

    #[validate(length(
        max = 64,
        message = "emoji_name must be at most 64 characters"
    ))]
    pub emoji_name: String,
}

impl DeleteReactionRequest {
    pub fn new(
        user_id: impl Into<String>,
        post_id: impl Into<String>,
        emoji_name: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            post_id: post_id.into(),
            emoji_name: emoji_name.into(),
        }
    }
}

//! Reaction entity - an emoji reaction left by a user on a post

use chrono::Utc;
use serde::Serialize;

use crate::error::DomainError;
use crate::value_objects::Id;

/// Maximum emoji name length, in characters
pub const MAX_EMOJI_NAME_LENGTH: usize = 64;

/// Reaction entity
///
/// Uniquely identified by `(user_id, post_id, emoji_name)`. `create_at` is
/// milliseconds since the Unix epoch and is owned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reaction {
    pub user_id: Id,
    pub post_id: Id,
    pub emoji_name: String,
    pub create_at: i64,
}

impl Reaction {
    /// Create a new, not yet persisted reaction
    pub fn new(user_id: Id, post_id: Id, emoji_name: impl Into<String>) -> Self {
        Self {
            user_id,
            post_id,
            emoji_name: emoji_name.into(),
            create_at: 0,
        }
    }

    /// Composite key used by key-value backends: `user_id|post_id|emoji_name`
    pub fn key(&self) -> String {
        format!("{}|{}|{}", self.user_id, self.post_id, self.emoji_name)
    }

    /// Validate the fields callers control
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_emoji_name(&self.emoji_name)
    }

    /// Copy of this reaction stamped with the current time
    pub fn stamped(&self) -> Self {
        Self {
            create_at: Utc::now().timestamp_millis(),
            ..self.clone()
        }
    }
}

/// Check an emoji name: non-empty, at most 64 characters, no control characters
///
/// Control characters (NUL in particular) cannot be stored as PostgreSQL
/// text, so both backends refuse them up front.
pub fn validate_emoji_name(emoji_name: &str) -> Result<(), DomainError> {
    if emoji_name.is_empty() {
        return Err(DomainError::InvalidEmojiName(
            "emoji name must not be empty".to_string(),
        ));
    }

    let length = emoji_name.chars().count();
    if length > MAX_EMOJI_NAME_LENGTH {
        return Err(DomainError::InvalidEmojiName(format!(
            "emoji name must be at most {MAX_EMOJI_NAME_LENGTH} characters, got {length}"
        )));
    }

    if emoji_name.chars().any(char::is_control) {
        return Err(DomainError::InvalidEmojiName(
            "emoji name must not contain control characters".to_string(),
        ));
    }

    Ok(())
}

/// Aggregated reaction count for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReactionCount {
    pub emoji_name: String,
    pub count: i64,
    pub me: bool,
}

impl ReactionCount {
    /// Create a new ReactionCount
    pub fn new(emoji_name: String, count: i64, me: bool) -> Self {
        Self {
            emoji_name,
            count,
            me,
        }
    }

    /// Fold reactions into per-emoji counts, in order of first appearance
    pub fn tally(reactions: &[Reaction], viewer: Id) -> Vec<ReactionCount> {
        let mut counts: Vec<ReactionCount> = Vec::new();
        for reaction in reactions {
            let me = reaction.user_id == viewer;
            match counts.iter_mut().find(|c| c.emoji_name == reaction.emoji_name) {
                Some(entry) => {
                    entry.count += 1;
                    entry.me |= me;
                }
                None => counts.push(ReactionCount::new(reaction.emoji_name.clone(), 1, me)),
            }
        }
        counts
    }
}

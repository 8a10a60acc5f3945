//! Reaction service
//!
//! Handles post reactions (add, remove, list, summarize). Every operation
//! requires a session and read access to the post's channel. A post that does
//! not exist is reported exactly like one the caller cannot see.

use reactions_core::entities::{validate_emoji_name, Post, Reaction, ReactionCount, Session};
use reactions_core::error::DomainError;
use reactions_core::value_objects::Id;
use tracing::{debug, info, instrument};
use validator::Validate;

use crate::dto::{
    DeleteReactionRequest, ReactionCountResponse, ReactionResponse, SaveReactionRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Add a reaction on behalf of the session user
    ///
    /// Saving a triple that already exists returns the stored reaction
    /// unchanged.
    #[instrument(skip(self, session, request), fields(post_id = %request.post_id, emoji = %request.emoji_name))]
    pub async fn save_reaction(
        &self,
        session: Option<&Session>,
        request: SaveReactionRequest,
    ) -> ServiceResult<ReactionResponse> {
        let session = require_session(session)?;

        let user_id = parse_id("user_id", &request.user_id)?;
        let post_id = parse_id("post_id", &request.post_id)?;
        request.validate()?;
        validate_emoji_name(&request.emoji_name)?;

        if user_id != session.user_id {
            debug!(user_id = %user_id, "rejected reaction on behalf of another user");
            return Err(ServiceError::permission_denied(
                "cannot react on behalf of another user",
            ));
        }

        self.resolve_post_for(session.user_id, post_id).await?;

        let reaction = Reaction::new(user_id, post_id, request.emoji_name);
        let saved = self.ctx.reaction_repo().save(&reaction).await?;

        info!(
            post_id = %saved.post_id,
            user_id = %saved.user_id,
            emoji = %saved.emoji_name,
            create_at = saved.create_at,
            "Reaction saved"
        );

        Ok(ReactionResponse::from(saved))
    }

    /// List all reactions on a post
    #[instrument(skip(self, session))]
    pub async fn list_reactions(
        &self,
        session: Option<&Session>,
        post_id: &str,
    ) -> ServiceResult<Vec<ReactionResponse>> {
        let session = require_session(session)?;
        let post_id = parse_id("post_id", post_id)?;

        self.resolve_post_for(session.user_id, post_id).await?;

        let reactions = self.ctx.reaction_repo().find_by_post(post_id).await?;
        Ok(reactions.into_iter().map(ReactionResponse::from).collect())
    }

    /// Count reactions per emoji, flagging the ones the caller left
    #[instrument(skip(self, session))]
    pub async fn summarize_reactions(
        &self,
        session: Option<&Session>,
        post_id: &str,
    ) -> ServiceResult<Vec<ReactionCountResponse>> {
        let session = require_session(session)?;
        let post_id = parse_id("post_id", post_id)?;

        self.resolve_post_for(session.user_id, post_id).await?;

        let reactions = self.ctx.reaction_repo().find_by_post(post_id).await?;
        Ok(ReactionCount::tally(&reactions, session.user_id)
            .into_iter()
            .map(ReactionCountResponse::from)
            .collect())
    }

    /// Remove a reaction
    ///
    /// Users may remove their own reactions. Removing someone else's requires
    /// manage rights in the post's channel. Removing a reaction that does not
    /// exist succeeds.
    #[instrument(skip(self, session, request), fields(post_id = %request.post_id, emoji = %request.emoji_name))]
    pub async fn delete_reaction(
        &self,
        session: Option<&Session>,
        request: DeleteReactionRequest,
    ) -> ServiceResult<()> {
        let session = require_session(session)?;

        let user_id = parse_id("user_id", &request.user_id)?;
        let post_id = parse_id("post_id", &request.post_id)?;
        if request.emoji_name.is_empty() {
            return Err(ServiceError::not_found("Reaction", ""));
        }
        request.validate()?;
        validate_emoji_name(&request.emoji_name)?;

        let post = self.resolve_post_for(session.user_id, post_id).await?;

        if user_id != session.user_id
            && !self
                .ctx
                .channel_authorizer()
                .can_manage(session.user_id, post.channel_id)
                .await?
        {
            debug!(
                actor = %session.user_id,
                target = %user_id,
                "rejected removal of another user's reaction"
            );
            return Err(ServiceError::permission_denied(
                "cannot remove another user's reaction",
            ));
        }

        let reaction = Reaction::new(user_id, post_id, request.emoji_name);
        let removed = self.ctx.reaction_repo().delete(&reaction).await?;

        if removed {
            info!(
                post_id = %post_id,
                user_id = %user_id,
                actor = %session.user_id,
                emoji = %reaction.emoji_name,
                "Reaction removed"
            );
        } else {
            debug!("no reaction matched, nothing removed");
        }

        Ok(())
    }

    /// Resolve a live post the user can read
    ///
    /// Missing posts and unreadable channels both yield `PermissionDenied`.
    async fn resolve_post_for(&self, user_id: Id, post_id: Id) -> ServiceResult<Post> {
        let Some(post) = self.ctx.post_repo().find_by_id(post_id).await? else {
            debug!(post_id = %post_id, "post not found, reporting as forbidden");
            return Err(ServiceError::permission_denied("cannot access post"));
        };

        if !self
            .ctx
            .channel_authorizer()
            .can_read(user_id, post.channel_id)
            .await?
        {
            debug!(channel_id = %post.channel_id, "channel not readable");
            return Err(ServiceError::permission_denied("cannot access post"));
        }

        Ok(post)
    }
}

fn require_session(session: Option<&Session>) -> ServiceResult<&Session> {
    session.ok_or(ServiceError::Unauthorized)
}

fn parse_id(field: &'static str, value: &str) -> ServiceResult<Id> {
    Id::parse(value).map_err(|e| ServiceError::from(DomainError::invalid_id(field, e)))
}

//! Reaction handlers
//!
//! Endpoints for post reactions. Every route requires a session, and the
//! session is checked before the body or path is looked at, so an anonymous
//! caller always gets 401. Beyond that the service owns every authorization
//! decision.

use axum::{extract::State, Json};
use reactions_core::Session;
use reactions_service::dto::{
    DeleteReactionRequest, ReactionCountResponse, ReactionResponse, SaveReactionRequest,
    StatusResponse,
};
use reactions_service::{ReactionService, ServiceError};

use crate::extractors::{ApiPath, JsonBody, OptionalAuthUser, PostIdPath, ReactionPath};
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

fn signed_in(auth: &OptionalAuthUser) -> ApiResult<Session> {
    auth.session().ok_or(ApiError::Service(ServiceError::Unauthorized))
}

/// Add a reaction
///
/// POST /reactions
pub async fn save_reaction(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    body: Result<JsonBody<SaveReactionRequest>, ApiError>,
) -> ApiResult<Json<ReactionResponse>> {
    let session = signed_in(&auth)?;
    let JsonBody(request) = body?;
    let service = ReactionService::new(state.service_context());
    let reaction = service.save_reaction(Some(&session), request).await?;
    Ok(Json(reaction))
}

/// List reactions on a post
///
/// GET /posts/{post_id}/reactions
pub async fn list_reactions(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    path: Result<ApiPath<PostIdPath>, ApiError>,
) -> ApiResult<Json<Vec<ReactionResponse>>> {
    let session = signed_in(&auth)?;
    let ApiPath(path) = path?;
    let service = ReactionService::new(state.service_context());
    let reactions = service
        .list_reactions(Some(&session), &path.post_id)
        .await?;
    Ok(Json(reactions))
}

/// Per-emoji reaction counts for a post
///
/// GET /posts/{post_id}/reactions/summary
pub async fn summarize_reactions(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    path: Result<ApiPath<PostIdPath>, ApiError>,
) -> ApiResult<Json<Vec<ReactionCountResponse>>> {
    let session = signed_in(&auth)?;
    let ApiPath(path) = path?;
    let service = ReactionService::new(state.service_context());
    let summary = service
        .summarize_reactions(Some(&session), &path.post_id)
        .await?;
    Ok(Json(summary))
}

/// Remove a reaction
///
/// DELETE /users/{user_id}/posts/{post_id}/reactions/{emoji_name}
pub async fn delete_reaction(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    path: Result<ApiPath<ReactionPath>, ApiError>,
) -> ApiResult<Json<StatusResponse>> {
    let session = signed_in(&auth)?;
    let ApiPath(path) = path?;
    let request = DeleteReactionRequest::new(path.user_id, path.post_id, path.emoji_name);
    let service = ReactionService::new(state.service_context());
    service.delete_reaction(Some(&session), request).await?;
    Ok(Json(StatusResponse::ok()))
}

//! API Integration Tests
//!
//! Each test starts its own server over empty in-memory stores, seeds a
//! channel, and drives the HTTP surface with reqwest.
//!
//! Run with: cargo test -p reactions-integration-tests --test api_tests

use reactions_core::Id;
use reactions_integration_tests::{
    assert_error, assert_json, assert_status, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use serde_json::json;

async fn start() -> (TestServer, Channel) {
    let server = TestServer::start().await.expect("Failed to start server");
    let channel = Channel::seed(&server).expect("Failed to seed channel");
    (server, channel)
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["storage"], "healthy");
}

#[tokio::test]
async fn test_health_not_ready_when_storage_down() {
    let server = TestServer::start().await.expect("Failed to start server");
    server.reactions.set_unavailable(true);

    let response = server.get("/health/ready").await.expect("Request failed");
    let body: serde_json::Value =
        assert_json(response, StatusCode::SERVICE_UNAVAILABLE).await.unwrap();
    assert_eq!(body["status"], "not_ready");
}

#[tokio::test]
async fn test_request_id_is_returned() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// Save Tests
// ============================================================================

#[tokio::test]
async fn test_save_reaction() {
    let (server, channel) = start().await;
    let body = channel.reaction_body(&channel.member, "smile");

    let response = server
        .post_auth("/api/v1/reactions", &channel.member.token, &body)
        .await
        .unwrap();
    let saved: ReactionJson = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(saved.user_id, channel.member.id.to_string());
    assert_eq!(saved.post_id, channel.post_id.to_string());
    assert_eq!(saved.emoji_name, "smile");
    assert!(saved.create_at > 0);
}

#[tokio::test]
async fn test_save_reaction_is_idempotent() {
    let (server, channel) = start().await;
    let body = channel.reaction_body(&channel.member, "smile");

    let first: ReactionJson = assert_json(
        server
            .post_auth("/api/v1/reactions", &channel.member.token, &body)
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    let second: ReactionJson = assert_json(
        server
            .post_auth("/api/v1/reactions", &channel.member.token, &body)
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();

    assert_eq!(first, second);
    assert_eq!(server.reactions.len(), 1);
}

#[tokio::test]
async fn test_save_distinct_emojis_accumulate() {
    let (server, channel) = start().await;

    for emoji in ["smile", "frowning"] {
        let body = channel.reaction_body(&channel.member, emoji);
        let response = server
            .post_auth("/api/v1/reactions", &channel.member.token, &body)
            .await
            .unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    let response = server
        .get_auth(&post_reactions_path(channel.post_id), &channel.member.token)
        .await
        .unwrap();
    let reactions: Vec<ReactionJson> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(reactions.len(), 2);
}

#[tokio::test]
async fn test_save_without_token_is_unauthorized() {
    let (server, channel) = start().await;
    let body = channel.reaction_body(&channel.member, "smile");

    let response = server.post("/api/v1/reactions", &body).await.unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "UNAUTHORIZED");
    assert!(server.reactions.is_empty());
}

#[tokio::test]
async fn test_anonymous_bad_body_is_unauthorized() {
    let (server, _channel) = start().await;

    let response = server.post_raw("/api/v1/reactions", "{not json").await.unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "UNAUTHORIZED");

    let response = server
        .post("/api/v1/reactions", &json!({ "emoji_name": "smile" }))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "UNAUTHORIZED");
    assert!(server.reactions.is_empty());
}

#[tokio::test]
async fn test_anonymous_bad_path_is_unauthorized() {
    let (server, channel) = start().await;

    let too_long = "a".repeat(65);
    let response = server
        .delete(&reaction_path("1234", channel.post_id, &too_long))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "UNAUTHORIZED");
}

#[tokio::test]
async fn test_save_with_invalid_token_is_rejected() {
    let (server, channel) = start().await;
    let body = channel.reaction_body(&channel.member, "smile");

    let response = server
        .post_auth("/api/v1/reactions", "not-a-jwt", &body)
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "INVALID_TOKEN");
}

#[tokio::test]
async fn test_save_with_malformed_ids_is_bad_request() {
    let (server, channel) = start().await;

    let bad_user = json!({
        "user_id": "1234",
        "post_id": channel.post_id.to_string(),
        "emoji_name": "smile",
    });
    let bad_post = json!({
        "user_id": channel.member.id.to_string(),
        "post_id": "",
        "emoji_name": "smile",
    });

    for body in [bad_user, bad_post] {
        let response = server
            .post_auth("/api/v1/reactions", &channel.member.token, &body)
            .await
            .unwrap();
        let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert_eq!(code, "VALIDATION_ERROR");
    }
}

#[tokio::test]
async fn test_save_emoji_length_bounds() {
    let (server, channel) = start().await;

    let longest = "a".repeat(64);
    let response = server
        .post_auth(
            "/api/v1/reactions",
            &channel.member.token,
            &channel.reaction_body(&channel.member, &longest),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    for emoji in [String::new(), "a".repeat(65)] {
        let response = server
            .post_auth(
                "/api/v1/reactions",
                &channel.member.token,
                &channel.reaction_body(&channel.member, &emoji),
            )
            .await
            .unwrap();
        assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
    }
}

#[tokio::test]
async fn test_save_rejects_control_characters_in_emoji() {
    let (server, channel) = start().await;
    let body = channel.reaction_body(&channel.member, "a\0b");

    let response = server
        .post_auth("/api/v1/reactions", &channel.member.token, &body)
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "VALIDATION_ERROR");
    assert!(server.reactions.is_empty());
}

#[tokio::test]
async fn test_save_for_another_user_is_forbidden() {
    let (server, channel) = start().await;
    let body = channel.reaction_body(&channel.other_member, "smile");

    let response = server
        .post_auth("/api/v1/reactions", &channel.member.token, &body)
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(code, "FORBIDDEN");
}

#[tokio::test]
async fn test_save_on_unknown_post_is_forbidden() {
    let (server, channel) = start().await;
    let body = SaveReactionBody::new(channel.member.id, Id::generate(), "smile");

    let response = server
        .post_auth("/api/v1/reactions", &channel.member.token, &body)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_save_on_deleted_post_is_forbidden() {
    let (server, channel) = start().await;
    assert!(server.posts.mark_deleted(channel.post_id));

    let response = server
        .post_auth(
            "/api/v1/reactions",
            &channel.member.token,
            &channel.reaction_body(&channel.member, "smile"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_save_by_outsider_is_forbidden() {
    let (server, channel) = start().await;

    let response = server
        .post_auth(
            "/api/v1/reactions",
            &channel.outsider.token,
            &channel.reaction_body(&channel.outsider, "smile"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
    assert!(server.reactions.is_empty());
}

#[tokio::test]
async fn test_save_with_malformed_body() {
    let (server, channel) = start().await;

    let response = server
        .post_raw_auth("/api/v1/reactions", &channel.member.token, "{not json")
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_BODY");
}

#[tokio::test]
async fn test_storage_failure_is_retryable() {
    let (server, channel) = start().await;
    server.reactions.set_unavailable(true);

    let response = server
        .post_auth(
            "/api/v1/reactions",
            &channel.member.token,
            &channel.reaction_body(&channel.member, "smile"),
        )
        .await
        .unwrap();
    let body: serde_json::Value =
        assert_json(response, StatusCode::SERVICE_UNAVAILABLE).await.unwrap();
    assert_eq!(body["error"]["code"], "STORAGE_ERROR");
    assert_eq!(body["error"]["retryable"], true);
}

// ============================================================================
// List and Summary Tests
// ============================================================================

#[tokio::test]
async fn test_list_reactions_in_save_order() {
    let (server, channel) = start().await;

    let saves = [
        (&channel.member, "smile"),
        (&channel.other_member, "smile"),
        (&channel.member, "tada"),
    ];
    for (user, emoji) in saves {
        let response = server
            .post_auth("/api/v1/reactions", &user.token, &channel.reaction_body(user, emoji))
            .await
            .unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    let response = server
        .get_auth(&post_reactions_path(channel.post_id), &channel.other_member.token)
        .await
        .unwrap();
    let reactions: Vec<ReactionJson> = assert_json(response, StatusCode::OK).await.unwrap();

    let listed: Vec<(String, String)> = reactions
        .into_iter()
        .map(|r| (r.user_id, r.emoji_name))
        .collect();
    assert_eq!(
        listed,
        vec![
            (channel.member.id.to_string(), "smile".to_string()),
            (channel.other_member.id.to_string(), "smile".to_string()),
            (channel.member.id.to_string(), "tada".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_list_reactions_on_empty_post() {
    let (server, channel) = start().await;

    let response = server
        .get_auth(&post_reactions_path(channel.post_id), &channel.member.token)
        .await
        .unwrap();
    let reactions: Vec<ReactionJson> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(reactions.is_empty());
}

#[tokio::test]
async fn test_list_reactions_access_checks() {
    let (server, channel) = start().await;
    let path = post_reactions_path(channel.post_id);

    let response = server.get(&path).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server.get_auth(&path, &channel.outsider.token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .get_auth("/api/v1/posts/not-an-id/reactions", &channel.member.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_summarize_reactions() {
    let (server, channel) = start().await;

    let saves = [
        (&channel.member, "smile"),
        (&channel.other_member, "smile"),
        (&channel.other_member, "tada"),
    ];
    for (user, emoji) in saves {
        let response = server
            .post_auth("/api/v1/reactions", &user.token, &channel.reaction_body(user, emoji))
            .await
            .unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    let path = format!("{}/summary", post_reactions_path(channel.post_id));
    let response = server.get_auth(&path, &channel.member.token).await.unwrap();
    let counts: Vec<ReactionCountJson> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(
        counts,
        vec![
            ReactionCountJson {
                emoji_name: "smile".to_string(),
                count: 2,
                me: true,
            },
            ReactionCountJson {
                emoji_name: "tada".to_string(),
                count: 1,
                me: false,
            },
        ]
    );
}

// ============================================================================
// Delete Tests
// ============================================================================

#[tokio::test]
async fn test_delete_own_reaction() {
    let (server, channel) = start().await;
    let response = server
        .post_auth(
            "/api/v1/reactions",
            &channel.member.token,
            &channel.reaction_body(&channel.member, "smile"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let path = reaction_path(channel.member.id, channel.post_id, "smile");
    let response = server.delete_auth(&path, &channel.member.token).await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body, json!({ "status": "OK" }));
    assert!(server.reactions.is_empty());
}

#[tokio::test]
async fn test_delete_missing_reaction_succeeds() {
    let (server, channel) = start().await;

    let path = reaction_path(channel.member.id, channel.post_id, "smile");
    let response = server.delete_auth(&path, &channel.member.token).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_delete_only_removes_matching_emoji() {
    let (server, channel) = start().await;

    for emoji in ["smile", "tada"] {
        let response = server
            .post_auth(
                "/api/v1/reactions",
                &channel.member.token,
                &channel.reaction_body(&channel.member, emoji),
            )
            .await
            .unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    let path = reaction_path(channel.member.id, channel.post_id, "smile");
    let response = server.delete_auth(&path, &channel.member.token).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get_auth(&post_reactions_path(channel.post_id), &channel.member.token)
        .await
        .unwrap();
    let reactions: Vec<ReactionJson> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(reactions.len(), 1);
    assert_eq!(reactions[0].emoji_name, "tada");
}

#[tokio::test]
async fn test_delete_other_users_reaction_requires_manage() {
    let (server, channel) = start().await;
    let response = server
        .post_auth(
            "/api/v1/reactions",
            &channel.other_member.token,
            &channel.reaction_body(&channel.other_member, "smile"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let path = reaction_path(channel.other_member.id, channel.post_id, "smile");

    let response = server.delete_auth(&path, &channel.member.token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(server.reactions.len(), 1);

    let response = server.delete_auth(&path, &channel.moderator.token).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
    assert!(server.reactions.is_empty());
}

#[tokio::test]
async fn test_delete_by_outsider_is_forbidden() {
    let (server, channel) = start().await;

    let path = reaction_path(channel.outsider.id, channel.post_id, "smile");
    let response = server.delete_auth(&path, &channel.outsider.token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_delete_input_errors() {
    let (server, channel) = start().await;

    let response = server
        .delete(&reaction_path(channel.member.id, channel.post_id, "smile"))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server
        .delete_auth(
            &reaction_path("1234", channel.post_id, "smile"),
            &channel.member.token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let too_long = "a".repeat(65);
    let response = server
        .delete_auth(
            &reaction_path(channel.member.id, channel.post_id, &too_long),
            &channel.member.token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    // No emoji segment means no matching route
    let response = server
        .delete_auth(
            &reaction_path(channel.member.id, channel.post_id, ""),
            &channel.member.token,
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "NOT_FOUND");
}

#[tokio::test]
async fn test_unknown_route_returns_json_not_found() {
    let (server, _channel) = start().await;

    let response = server.get("/api/v1/nothing-here").await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("/api/v1/nothing-here"));
}

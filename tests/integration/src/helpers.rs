//! Test helpers for integration tests
//!
//! Provides a test server bound to an ephemeral port, seeding helpers for the
//! in-memory collaborators, and response assertions.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use reactions_api::{create_app, run_server, AppState};
use reactions_common::{AppConfig, JwtService};
use reactions_core::{Id, Permissions, Post};
use reactions_db::{MemoryChannelAuthorizer, MemoryPostRepository, MemoryReactionRepository};
use reactions_service::ServiceContextBuilder;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Signing secret shared by the server and the tokens tests issue
pub const TEST_JWT_SECRET: &str = "integration-test-secret-that-is-long-enough";

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub reactions: Arc<MemoryReactionRepository>,
    pub posts: Arc<MemoryPostRepository>,
    pub members: Arc<MemoryChannelAuthorizer>,
    jwt: JwtService,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server over empty in-memory stores
    pub async fn start() -> Result<Self> {
        let config = AppConfig::in_memory(TEST_JWT_SECRET);
        let jwt = JwtService::new(&config.jwt.secret, config.jwt.access_token_expiry);

        let reactions = Arc::new(MemoryReactionRepository::new());
        let posts = Arc::new(MemoryPostRepository::new());
        let members = Arc::new(MemoryChannelAuthorizer::new());

        let service_context = ServiceContextBuilder::new()
            .reaction_repo(reactions.clone())
            .post_repo(posts.clone())
            .channel_authorizer(members.clone())
            .build()?;

        let app = create_app(AppState::new(service_context, config));

        // Port 0 lets the OS pick a free port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            run_server(app, listener).await.ok();
        });

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            reactions,
            posts,
            members,
            jwt,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Issue an access token for a user
    pub fn token_for(&self, user_id: Id) -> Result<String> {
        Ok(self.jwt.issue_access_token(user_id)?)
    }

    /// Create a live post in a channel and return its id
    pub fn seed_post(&self, channel_id: Id, author: Id) -> Id {
        let post = Post::new(Id::generate(), channel_id, author, 1);
        let id = post.id;
        self.posts.insert(post);
        id
    }

    /// Make the user a member of the channel
    pub fn grant(&self, channel_id: Id, user_id: Id, permissions: Permissions) {
        self.members.grant(channel_id, user_id, permissions);
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a GET request with auth token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).bearer_auth(token).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }

    /// Make a POST request with auth token
    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(body)
            .send()
            .await?)
    }

    /// Make a POST request with a raw body and no token
    pub async fn post_raw(&self, path: &str, body: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .body(body.to_string())
            .send()
            .await?)
    }

    /// Make a POST request with a raw body
    pub async fn post_raw_auth(&self, path: &str, token: &str, body: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .post(&url)
            .bearer_auth(token)
            .header("Content-Type", "application/json")
            .body(body.to_string())
            .send()
            .await?)
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.delete(&url).send().await?)
    }

    /// Make a DELETE request with auth token
    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.delete(&url).bearer_auth(token).send().await?)
    }
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}

/// Assert an error response and return its code
pub async fn assert_error(response: Response, expected_status: StatusCode) -> Result<String> {
    let body: serde_json::Value = assert_json(response, expected_status).await?;
    body["error"]["code"]
        .as_str()
        .map(String::from)
        .ok_or_else(|| anyhow::anyhow!("error body without code: {body}"))
}

//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;

use axum::Router;
use reactions_common::{AppConfig, AppError, AppResult, StorageBackend};
use reactions_db::{
    create_pool, run_migrations, run_migrations_from, MemoryChannelAuthorizer,
    MemoryPostRepository, MemoryReactionRepository, PgChannelAuthorizer, PgPostRepository,
    PgReactionRepository, PoolConfig,
};
use reactions_service::{ServiceContext, ServiceContextBuilder};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router();
    let router = apply_middleware(router, state.config());
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> AppResult<AppState> {
    let service_context = match config.storage {
        StorageBackend::Postgres => postgres_context(&config).await?,
        StorageBackend::Memory => memory_context()?,
    };

    Ok(AppState::new(service_context, config))
}

async fn postgres_context(config: &AppConfig) -> AppResult<ServiceContext> {
    let pool_config = PoolConfig::new(config.database.url.as_str()).with_connections(
        config.database.min_connections,
        config.database.max_connections,
    );
    let pool = create_pool(&pool_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    if config.database.run_migrations {
        let applied = match config.database.migrations_dir.as_deref() {
            Some(dir) => run_migrations_from(&pool, dir).await,
            None => run_migrations(&pool).await,
        };
        applied.map_err(|e| AppError::Database(e.to_string()))?;
    }

    ServiceContextBuilder::new()
        .reaction_repo(Arc::new(PgReactionRepository::new(pool.clone())))
        .post_repo(Arc::new(PgPostRepository::new(pool.clone())))
        .channel_authorizer(Arc::new(PgChannelAuthorizer::new(pool)))
        .build()
        .map_err(|e| AppError::Config(e.to_string()))
}

fn memory_context() -> AppResult<ServiceContext> {
    warn!("Using in-memory storage; reactions are lost on restart and no posts are known");

    ServiceContextBuilder::new()
        .reaction_repo(Arc::new(MemoryReactionRepository::new()))
        .post_repo(Arc::new(MemoryPostRepository::new()))
        .channel_authorizer(Arc::new(MemoryChannelAuthorizer::new()))
        .build()
        .map_err(|e| AppError::Config(e.to_string()))
}

/// Serve the application on an already bound listener
pub async fn run_server(app: Router, listener: TcpListener) -> AppResult<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("Server listening on http://{}", addr);
    }

    axum::serve(listener, app).await?;
    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> AppResult<()> {
    let addr = config.api.address();

    let state = create_app_state(config).await?;
    info!(storage = ?state.storage(), "Application state ready");
    let app = create_app(state);

    info!("Starting HTTP server on {}", addr);
    let listener = TcpListener::bind(&addr).await?;

    run_server(app, listener).await
}

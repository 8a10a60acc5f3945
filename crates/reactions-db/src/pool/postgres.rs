//! PostgreSQL pool and schema setup

use std::path::Path;
use std::time::Duration;

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{info, instrument, warn};

/// Migrations shipped with this crate
///
/// The path is fixed when the crate is built. Binaries deployed away from the
/// source tree must point [`run_migrations_from`] at a copy of the scripts.
const BUNDLED_MIGRATIONS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/migrations");

/// Connection pool sizing and timeouts
#[derive(Debug, Clone)]
pub struct PoolConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// How long a request may wait for a free connection before failing
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
}

impl PoolConfig {
    /// Pool for `url` with default sizing
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            min_connections: 1,
            acquire_timeout: Duration::from_secs(5),
            idle_timeout: Duration::from_secs(300),
            max_lifetime: Duration::from_secs(1800),
        }
    }

    /// Override the pool bounds; `min` is clamped to `max`
    #[must_use]
    pub fn with_connections(mut self, min: u32, max: u32) -> Self {
        self.max_connections = max.max(1);
        self.min_connections = min.min(self.max_connections);
        self
    }
}

/// Open a connection pool
///
/// Fails if the first connection cannot be established, so a misconfigured
/// URL is caught at startup.
#[instrument(skip(config), fields(max = config.max_connections, min = config.min_connections))]
pub async fn create_pool(config: &PoolConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(config.idle_timeout)
        .max_lifetime(config.max_lifetime)
        .connect(&config.url)
        .await?;
    info!("PostgreSQL pool ready");
    Ok(pool)
}

/// Apply the bundled migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    run_migrations_from(pool, Path::new(BUNDLED_MIGRATIONS_DIR)).await
}

/// Apply the migrations found in `dir`
pub async fn run_migrations_from(pool: &PgPool, dir: &Path) -> Result<(), MigrateError> {
    let migrator = load_migrations(dir).await?;
    migrator.run(pool).await?;
    info!(dir = %dir.display(), "Database migrations applied");
    Ok(())
}

async fn load_migrations(dir: &Path) -> Result<Migrator, MigrateError> {
    Migrator::new(dir).await.map_err(|e| {
        warn!(dir = %dir.display(), error = %e, "cannot read migrations");
        e
    })
}

//! # reactions-db
//!
//! Storage layer implementing the repository traits from `reactions-core`.
//!
//! ## Overview
//!
//! - PostgreSQL implementations via SQLx, with connection pool management and
//!   runtime migrations for the `reactions` table
//! - In-memory implementations backed by `DashMap`, used for local runs and tests
//!
//! Posts and channel membership are owned by other subsystems; the adapters
//! here only read them.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use reactions_db::{create_pool, run_migrations, PgReactionRepository, PoolConfig};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PoolConfig::new("postgres://localhost/reactions").with_connections(1, 10);
//!     let pool = create_pool(&config).await?;
//!     run_migrations(&pool).await?;
//!     let reaction_repo = PgReactionRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::{MemoryChannelAuthorizer, MemoryPostRepository, MemoryReactionRepository};
pub use pool::{create_pool, run_migrations, run_migrations_from, PgPool, PoolConfig};
pub use repositories::{PgChannelAuthorizer, PgPostRepository, PgReactionRepository};

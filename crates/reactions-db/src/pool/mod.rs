//! Database connection pool management

mod postgres;

pub use postgres::{create_pool, run_migrations, run_migrations_from, PoolConfig};

pub use sqlx::postgres::PgPool;

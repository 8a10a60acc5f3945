//! PostgreSQL repository implementations

mod channel;
mod error;
mod post;
mod reaction;

pub use channel::PgChannelAuthorizer;
pub use post::PgPostRepository;
pub use reaction::PgReactionRepository;

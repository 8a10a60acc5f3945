//! # reactions-core
//!
//! Domain layer containing entities, value objects, and repository traits for post reactions.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    validate_emoji_name, Post, Reaction, ReactionCount, Session, MAX_EMOJI_NAME_LENGTH,
};
pub use error::DomainError;
pub use traits::{ChannelAuthorizer, PostRepository, ReactionRepository, RepoResult};
pub use value_objects::{Id, IdParseError, Permissions};

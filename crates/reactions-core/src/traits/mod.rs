//! Ports implemented by the infrastructure layer

mod repositories;

pub use repositories::{ChannelAuthorizer, PostRepository, ReactionRepository, RepoResult};

//! Domain entities - core business objects

mod post;
mod reaction;
mod session;

pub use post::Post;
pub use reaction::{validate_emoji_name, Reaction, ReactionCount, MAX_EMOJI_NAME_LENGTH};
pub use session::Session;

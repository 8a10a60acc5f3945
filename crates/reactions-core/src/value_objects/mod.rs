//! Value objects - immutable types that represent domain concepts

mod id;
mod permissions;

pub use id::{Id, IdParseError};
pub use permissions::Permissions;

//! Entity to model mappers
//!
//! - `TryFrom<Model> for Entity`: convert database rows to domain objects,
//!   re-validating identifiers on the way in
//! - `*Insert` structs: prepare entity data for database operations

mod post;
mod reaction;

pub use reaction::ReactionInsert;

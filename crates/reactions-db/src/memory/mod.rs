//! In-memory repository implementations
//!
//! Backed by `DashMap` for concurrent access. Used for local runs and tests;
//! contents are lost when the process exits.

mod channel;
mod post;
mod reaction;

pub use channel::MemoryChannelAuthorizer;
pub use post::MemoryPostRepository;
pub use reaction::MemoryReactionRepository;

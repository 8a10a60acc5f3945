//! Business logic services

pub mod context;
pub mod error;
pub mod reaction;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use reaction::ReactionService;

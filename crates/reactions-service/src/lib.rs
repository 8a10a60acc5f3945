//! # reactions-service
//!
//! Application layer: validates reaction requests, resolves authorization
//! through the post and channel collaborators, and drives the reaction store.

pub mod dto;
pub mod services;

pub use services::{
    ReactionService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
};

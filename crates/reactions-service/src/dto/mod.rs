//! Data transfer objects for API requests and responses
//!
//! Requests carry identifiers as raw strings; the service parses them so
//! malformed input is reported the same way regardless of the caller.

pub mod requests;
pub mod responses;

pub use requests::{DeleteReactionRequest, SaveReactionRequest};
pub use responses::{
    HealthChecks, HealthResponse, ReactionCountResponse, ReactionResponse, ReadinessResponse,
    StatusResponse,
};

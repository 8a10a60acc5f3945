//! Authenticated caller identity

use crate::value_objects::Id;

/// The already-authenticated user on whose behalf an operation runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub user_id: Id,
}

impl Session {
    /// Create a session for a user
    pub fn new(user_id: Id) -> Self {
        Self { user_id }
    }
}

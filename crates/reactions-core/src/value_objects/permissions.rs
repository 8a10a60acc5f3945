//! Channel-scoped permission bitflags
//!
//! A member's permissions are stored per channel as a 64-bit integer. There is
//! no global permission set: privileges never reach past the channels a user
//! belongs to.

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

bitflags! {
    /// Permission flags held by a channel member
    ///
    /// Stored as BIGINT in database, serialized as string in JSON for JavaScript safety.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Permissions: u64 {
        /// Read the channel and its posts
        const READ_CHANNEL     = 1 << 0;
        /// Add reactions to posts
        const ADD_REACTION     = 1 << 1;
        /// Remove reactions left by other members
        const MANAGE_REACTIONS = 1 << 2;
        /// Manage the channel itself
        const MANAGE_CHANNEL   = 1 << 3;
        /// Channel administrator, implies every other flag
        const ADMINISTRATOR    = 1 << 8;

        /// Default permissions for an ordinary member
        const MEMBER = Self::READ_CHANNEL.bits() | Self::ADD_REACTION.bits();

        /// Permissions granted to channel moderators
        const MODERATOR = Self::MEMBER.bits()
            | Self::MANAGE_REACTIONS.bits()
            | Self::MANAGE_CHANNEL.bits();
    }
}

impl Permissions {
    /// Check if the permission set contains a required permission
    ///
    /// Administrators bypass all permission checks.
    #[inline]
    pub fn has(&self, permission: Permissions) -> bool {
        if self.contains(Permissions::ADMINISTRATOR) {
            return true;
        }
        self.contains(permission)
    }

    /// Whether the member can read the channel
    #[inline]
    pub fn can_read(&self) -> bool {
        self.has(Permissions::READ_CHANNEL)
    }

    /// Whether the member can remove other members' reactions
    ///
    /// Managing always requires being able to read the channel as well.
    #[inline]
    pub fn can_manage(&self) -> bool {
        self.can_read()
            && (self.has(Permissions::MANAGE_REACTIONS) || self.has(Permissions::MANAGE_CHANNEL))
    }

    /// Get the raw bits as i64 (for database storage)
    #[inline]
    pub fn to_i64(self) -> i64 {
        self.bits() as i64
    }

    /// Create from raw i64 bits (from database)
    #[inline]
    pub fn from_i64(bits: i64) -> Self {
        Permissions::from_bits_truncate(bits as u64)
    }
}

impl Default for Permissions {
    fn default() -> Self {
        Permissions::empty()
    }
}

impl fmt::Display for Permissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

impl Serialize for Permissions {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.bits().to_string())
    }
}

impl<'de> Deserialize<'de> for Permissions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value
            .parse::<u64>()
            .map(Permissions::from_bits_truncate)
            .map_err(serde::de::Error::custom)
    }
}

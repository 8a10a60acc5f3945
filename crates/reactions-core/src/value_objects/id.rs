//! Opaque 26-character identifier used for users, posts and channels
//!
//! Fresh identifiers are a random UUID v4 encoded with a 32-symbol alphabet,
//! which yields exactly 26 lowercase alphanumeric characters. Identifiers
//! coming from outside are only checked for shape: 26 ASCII letters or digits.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// Number of characters in an identifier
pub const ID_LENGTH: usize = 26;

const ENCODING: &[u8; 32] = b"ybndrfg8ejkmcpqxot1uwisza345h769";

/// Validated 26-character identifier
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Id([u8; ID_LENGTH]);

impl Id {
    /// Generate a new random identifier
    pub fn generate() -> Self {
        let bytes = Uuid::new_v4().into_bytes();
        let value = u128::from_be_bytes(bytes);

        // 26 groups of 5 bits cover 130 bits; the last group is zero-padded.
        let mut out = [0u8; ID_LENGTH];
        for (i, slot) in out.iter_mut().enumerate() {
            let shift = 128_i32 - 5 * (i as i32 + 1);
            let index = if shift >= 0 {
                (value >> shift) & 0x1F
            } else {
                (value << -shift) & 0x1F
            };
            *slot = ENCODING[index as usize];
        }
        Self(out)
    }

    /// Parse and validate an identifier
    pub fn parse(s: &str) -> Result<Self, IdParseError> {
        if s.len() != ID_LENGTH {
            return Err(IdParseError::InvalidLength(s.len()));
        }
        if !s.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(IdParseError::InvalidCharacter);
        }

        let mut out = [0u8; ID_LENGTH];
        out.copy_from_slice(s.as_bytes());
        Ok(Self(out))
    }

    /// Check whether a string is a well-formed identifier
    #[inline]
    pub fn is_valid(s: &str) -> bool {
        Self::parse(s).is_ok()
    }

    /// Borrow the identifier as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        // Only ASCII alphanumerics are ever stored.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

/// Error when parsing an identifier from a string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdParseError {
    #[error("identifier must be {ID_LENGTH} characters, got {0}")]
    InvalidLength(usize),

    #[error("identifier must contain only ASCII letters and digits")]
    InvalidCharacter,
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.as_str())
    }
}

impl std::str::FromStr for Id {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Id::parse(s)
    }
}

impl TryFrom<String> for Id {
    type Error = IdParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Id::parse(&value)
    }
}

impl AsRef<str> for Id {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Serialize for Id {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Id::parse(&value).map_err(serde::de::Error::custom)
    }
}

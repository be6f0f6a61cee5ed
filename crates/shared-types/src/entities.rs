//! # Core Identifiers
//!
//! Identifiers shared by the validation engine and its storage backends.
//!
//! Participants are identified by a key **fingerprint** (fixed-length
//! uppercase hex). Monetary sources are owned by a base58 **pubkey**.
//! Block digests are uppercase hex; their leading-zero count is the
//! proof-of-work measure.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of hex characters in a key fingerprint.
pub const FINGERPRINT_LEN: usize = 40;

/// Number of trailing fingerprint characters forming the short key id.
///
/// Membership lines and their detached signatures are joined on this id.
pub const KEY_ID_LEN: usize = 16;

/// A public-key fingerprint uniquely identifying a participant.
///
/// Stored uppercase; stable across blocks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into().to_uppercase())
    }

    /// The short key id: the trailing [`KEY_ID_LEN`] characters.
    pub fn key_id(&self) -> &str {
        let start = self.0.len().saturating_sub(KEY_ID_LEN);
        &self.0[start..]
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Fingerprint {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// A base58-encoded public key, the owner of monetary sources.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pubkey(String);

impl Pubkey {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Pubkey {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// An uppercase hex block digest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockHash(String);

impl BlockHash {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into().to_uppercase())
    }

    /// Count of leading `'0'` hex digits, the proof-of-work measure.
    pub fn leading_zeros(&self) -> u32 {
        self.0.chars().take_while(|c| *c == '0').count() as u32
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlockHash {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

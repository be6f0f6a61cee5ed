//! Monetary sources
//!
//! A source is a spendable unit of currency: either a universal dividend
//! credited to a member, or the output of a past transaction. Sources
//! are identified by a structured composite key; the canonical text form
//! only exists in `Display`, and is what rejection messages quote.

use serde::{Deserialize, Serialize};
use shared_types::{Fingerprint, Pubkey};
use std::fmt;

/// The two kinds of spendable sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceKind {
    Dividend,
    Transaction,
}

impl SourceKind {
    /// One-letter tag used in the canonical source key.
    pub fn letter(&self) -> char {
        match self {
            Self::Dividend => 'D',
            Self::Transaction => 'T',
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Composite key of a spendable source.
///
/// A source is spent at most once across the chain; a block referencing
/// one as input asserts it is currently unconsumed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceRef {
    /// Key owning (and entitled to spend) the source.
    pub owner: Pubkey,
    pub kind: SourceKind,
    /// Height of the block that created the source.
    pub origin_number: u64,
    /// Fingerprint recorded at creation (dividend recipient or
    /// transaction hash fingerprint).
    pub origin_fingerprint: Fingerprint,
    pub amount: u64,
}

impl fmt::Display for SourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}:{}",
            self.owner, self.kind, self.origin_number, self.origin_fingerprint, self.amount
        )
    }
}

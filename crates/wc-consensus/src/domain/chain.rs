//! Chain-state snapshots and linkage rules
//!
//! The engine never walks the chain itself: the store hands it compact
//! snapshots of the head, of an issuer's latest block and of the last
//! dividend block, all pinned at the height being extended.

use super::{Block, RejectionReason};
use serde::{Deserialize, Serialize};
use shared_types::{BlockHash, Fingerprint};

/// Snapshot of the current chain head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadBlock {
    pub number: u64,
    pub hash: BlockHash,
    pub issuer: Fingerprint,
    pub members_count: u64,
    /// Declared date of the head block.
    pub date: u64,
    pub confirmed_date: u64,
    /// Whether the head block changed the confirmed date itself.
    pub confirmed_date_changed: bool,
    /// Consecutive blocks that have declared the head's (not yet
    /// confirmed) date.
    pub new_date_nth: u64,
}

/// The most recent block produced by a given issuer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuerBlock {
    pub number: u64,
    pub hash: BlockHash,
}

/// Monetary state carried by the last block that issued a dividend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DividendBlock {
    pub confirmed_date: u64,
    pub monetary_mass: u64,
    pub dividend: u64,
}

/// Chain-linkage rules: a candidate either starts the chain or extends
/// the head by exactly one, naming the head's hash and issuer.
pub fn check_linkage(block: &Block, head: Option<&HeadBlock>) -> Result<(), RejectionReason> {
    let Some(head) = head else {
        if !block.is_root() {
            return Err(RejectionReason::RootRequired);
        }
        if block.previous_hash.is_some() || block.previous_issuer.is_some() {
            return Err(RejectionReason::RootWithPrevious);
        }
        return Ok(());
    };

    if block.number <= head.number {
        return Err(RejectionReason::TooLate);
    }
    if block.number > head.number + 1 {
        return Err(RejectionReason::TooEarly);
    }
    if block.previous_hash.as_ref() != Some(&head.hash) {
        return Err(RejectionReason::PreviousHashMismatch);
    }
    if block.previous_issuer.as_ref() != Some(&head.issuer) {
        return Err(RejectionReason::PreviousIssuerMismatch);
    }
    Ok(())
}

//! Block domain entities
//!
//! A block asserts member changes, certifications between keys, an
//! optional universal dividend and currency transactions. Everything
//! here is already parsed: the document layer hands the engine
//! structured records, never raw text.

use super::SourceRef;
use serde::{Deserialize, Serialize};
use shared_types::{BlockHash, Fingerprint};
use std::fmt;

/// Status declared by a signed membership document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MembershipStatus {
    Joining,
    Leaving,
}

impl fmt::Display for MembershipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Joining => f.write_str("IN"),
            Self::Leaving => f.write_str("OUT"),
        }
    }
}

/// A membership line carried by a block.
///
/// Must be matched 1:1 with a [`MembershipSignature`] record; the join
/// key is the fingerprint's short key id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    pub fingerprint: Fingerprint,
    pub status: MembershipStatus,
    /// Declared timestamp of the membership document.
    pub date: u64,
    pub user_id: String,
}

impl Membership {
    /// Canonical text the membership signature covers.
    pub fn signed_payload(&self, currency: &str) -> String {
        format!(
            "Version: 1\nCurrency: {}\nIssuer: {}\nDate: {}\nMembership: {}\nUserID: {}\n",
            currency, self.fingerprint, self.date, self.status, self.user_id
        )
    }
}

/// Detached signature over a membership document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipSignature {
    pub fingerprint: Fingerprint,
    pub signature: String,
}

/// A member vouching for another key's identity binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCertification {
    pub issuer: Fingerprint,
    pub target: Fingerprint,
    /// Timestamp at which the certification was issued.
    pub created: u64,
    pub signature: String,
}

impl TierCertification {
    /// Canonical text the certification signature covers: the certified
    /// user-id binding.
    pub fn signed_payload(&self, user_id: &str) -> String {
        format!("{}:{}:{}\n", self.target, user_id, self.created)
    }
}

/// Key material a newcomer attaches to a block.
///
/// A well-formed bundle carries exactly one user-id and exactly one
/// self-certification; tier certifications target the bundle's key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKeyBundle {
    pub fingerprint: Fingerprint,
    pub user_ids: Vec<String>,
    /// Self-signatures binding the user-id to the key.
    pub self_certifications: Vec<String>,
    pub certifications: Vec<TierCertification>,
}

impl PublicKeyBundle {
    /// The bundle's single user-id, when well-formed.
    pub fn user_id(&self) -> Option<&str> {
        match self.user_ids.as_slice() {
            [uid] => Some(uid),
            _ => None,
        }
    }
}

/// One entry of the members-changes list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberChange {
    Join(Fingerprint),
    Leave(Fingerprint),
}

/// A currency transaction: the set of sources it consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub inputs: Vec<SourceRef>,
}

/// A parsed candidate block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub version: u32,
    pub currency: String,
    pub nonce: u64,
    pub number: u64,
    /// Declared timestamp.
    pub date: u64,
    /// Date the chain currently agrees on; equals `date` on a
    /// confirming block.
    pub confirmed_date: u64,
    pub issuer: Fingerprint,
    /// Absent on the root block only.
    pub previous_hash: Option<BlockHash>,
    pub previous_issuer: Option<Fingerprint>,
    /// Size of the member set once this block is applied.
    pub members_count: u64,
    pub members_changes: Vec<MemberChange>,
    pub public_keys: Vec<PublicKeyBundle>,
    pub memberships: Vec<Membership>,
    pub membership_sigs: Vec<MembershipSignature>,
    pub dividend: Option<u64>,
    pub transactions: Vec<Transaction>,
    pub signature: String,
    pub hash: BlockHash,
}

impl Block {
    pub fn is_root(&self) -> bool {
        self.number == 0
    }

    /// Fingerprints joining through this block's members-changes.
    pub fn joiners(&self) -> impl Iterator<Item = &Fingerprint> {
        self.members_changes.iter().filter_map(|c| match c {
            MemberChange::Join(fpr) => Some(fpr),
            MemberChange::Leave(_) => None,
        })
    }

    /// Fingerprints leaving through this block's members-changes.
    pub fn leavers(&self) -> impl Iterator<Item = &Fingerprint> {
        self.members_changes.iter().filter_map(|c| match c {
            MemberChange::Leave(fpr) => Some(fpr),
            MemberChange::Join(_) => None,
        })
    }

    pub fn has_change(&self, change: &MemberChange) -> bool {
        self.members_changes.contains(change)
    }

    /// All tier certifications carried by this block's key bundles.
    pub fn certifications(&self) -> impl Iterator<Item = &TierCertification> {
        self.public_keys.iter().flat_map(|b| b.certifications.iter())
    }

    /// Tier certifications targeting `fingerprint`.
    pub fn certifications_for(&self, fingerprint: &Fingerprint) -> Vec<&TierCertification> {
        self.certifications()
            .filter(|c| c.target == *fingerprint)
            .collect()
    }

    /// The key bundle a newcomer attached for `fingerprint`, if any.
    pub fn bundle_for(&self, fingerprint: &Fingerprint) -> Option<&PublicKeyBundle> {
        self.public_keys.iter().find(|b| b.fingerprint == *fingerprint)
    }

    /// Every source consumed by this block's transactions.
    pub fn consumed_sources(&self) -> impl Iterator<Item = &SourceRef> {
        self.transactions.iter().flat_map(|tx| tx.inputs.iter())
    }
}

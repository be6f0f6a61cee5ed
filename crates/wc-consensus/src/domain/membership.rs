//! Membership coherence rules
//!
//! Membership lines and their detached signatures travel separately in a
//! block and are joined here, 1:1, on the short key id. Anything left
//! unmatched on either side is an orphan and rejects the whole block, as
//! does a key bundle nobody claims.

use super::{Block, HeadBlock, MemberChange, Membership, MembershipSignature, MembershipStatus,
            PublicKeyBundle, RejectionReason};
use shared_types::Fingerprint;
use std::collections::HashMap;

/// A membership line joined with its detached signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedMembership<'a> {
    pub membership: &'a Membership,
    pub signature: &'a MembershipSignature,
}

impl MatchedMembership<'_> {
    pub fn fingerprint(&self) -> &Fingerprint {
        &self.membership.fingerprint
    }

    pub fn is_joining(&self) -> bool {
        self.membership.status == MembershipStatus::Joining
    }
}

/// Join membership lines with signature records, 1:1 by key id.
pub fn match_memberships(block: &Block) -> Result<Vec<MatchedMembership<'_>>, RejectionReason> {
    let mut by_key_id: HashMap<&str, &Membership> = HashMap::new();
    for ms in &block.memberships {
        by_key_id.insert(ms.fingerprint.key_id(), ms);
    }

    let mut signed: HashMap<&str, &MembershipSignature> = HashMap::new();
    for sig in &block.membership_sigs {
        let key_id = sig.fingerprint.key_id();
        if !by_key_id.contains_key(key_id) {
            return Err(RejectionReason::OrphanSignature);
        }
        signed.insert(key_id, sig);
    }

    let mut matched = Vec::with_capacity(block.memberships.len());
    for ms in &block.memberships {
        let Some(signature) = signed.get(ms.fingerprint.key_id()).copied() else {
            return Err(RejectionReason::OrphanMembership);
        };
        matched.push(MatchedMembership {
            membership: ms,
            signature,
        });
    }
    Ok(matched)
}

/// Every key bundle in the block must be claimed by a membership.
pub fn check_bundle_memberships(block: &Block) -> Result<(), RejectionReason> {
    for bundle in &block.public_keys {
        let claimed = block
            .memberships
            .iter()
            .any(|ms| ms.fingerprint.key_id() == bundle.fingerprint.key_id());
        if !claimed {
            return Err(RejectionReason::OrphanPubkey);
        }
    }
    Ok(())
}

/// A newcomer's bundle carries exactly one user-id and exactly one
/// self-certification.
pub fn check_bundle_shape(bundle: &PublicKeyBundle) -> Result<(), RejectionReason> {
    if bundle.user_ids.len() != 1 {
        return Err(RejectionReason::WrongUserIdCount);
    }
    if bundle.self_certifications.len() != 1 {
        return Err(RejectionReason::WrongSelfCertificationCount);
    }
    Ok(())
}

/// Every kicked member must appear as a Leave change.
pub fn check_kicked(block: &Block, kicked: &[Fingerprint]) -> Result<(), RejectionReason> {
    for fpr in kicked {
        if !block.has_change(&MemberChange::Leave(fpr.clone())) {
            return Err(RejectionReason::KickedNotExcluded);
        }
    }
    Ok(())
}

/// Members-changes must exactly mirror the accepted memberships plus the
/// kicked set, and the declared members count must match the resulting
/// member-set size.
pub fn check_community_changes(
    block: &Block,
    head: Option<&HeadBlock>,
    kicked: &[Fingerprint],
    matched: &[MatchedMembership<'_>],
) -> Result<(), RejectionReason> {
    // Each accepted membership has its change entry.
    for m in matched {
        let change = match m.membership.status {
            MembershipStatus::Joining => MemberChange::Join(m.fingerprint().clone()),
            MembershipStatus::Leaving => MemberChange::Leave(m.fingerprint().clone()),
        };
        if !block.has_change(&change) {
            return Err(RejectionReason::WrongMembersChanges);
        }
    }

    // And conversely: each change entry is backed by a membership, or by
    // a kick for a Leave entry.
    for change in &block.members_changes {
        let backed = match change {
            MemberChange::Join(fpr) => matched
                .iter()
                .any(|m| m.is_joining() && m.fingerprint() == fpr),
            MemberChange::Leave(fpr) => {
                kicked.contains(fpr)
                    || matched
                        .iter()
                        .any(|m| !m.is_joining() && m.fingerprint() == fpr)
            }
        };
        if !backed {
            return Err(RejectionReason::WrongMembersChanges);
        }
    }

    let joins = block.joiners().count() as u64;
    let leaves = block.leavers().count() as u64;
    let base = head.map(|h| h.members_count).unwrap_or(0);
    if block.members_count != (base + joins).saturating_sub(leaves) {
        return Err(RejectionReason::WrongMembersCount);
    }
    Ok(())
}

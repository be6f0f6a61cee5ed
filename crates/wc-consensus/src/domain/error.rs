//! Error taxonomy for block validation
//!
//! Rejections form a closed set of protocol verdicts with stable
//! messages: two independently-operated nodes must report the same
//! reason for the same block. Infrastructure faults are kept apart so a
//! flaky store is never mistaken for a consensus rejection.

use super::SourceRef;
use shared_types::StoreError;

/// Why a candidate block was refused.
///
/// Each variant renders the exact message the protocol mandates for the
/// condition; messages carry the data needed to reproduce them (zero
/// counts, expected dividend, source keys).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RejectionReason {
    // Chain linkage
    #[error("Root block required first")]
    RootRequired,

    #[error("Too late for this block")]
    TooLate,

    #[error("Too early for this block")]
    TooEarly,

    #[error("PreviousHash not matching hash of current block")]
    PreviousHashMismatch,

    #[error("PreviousIssuer not matching issuer of current block")]
    PreviousIssuerMismatch,

    #[error("Root block must not have PreviousHash nor PreviousIssuer")]
    RootWithPrevious,

    // Proof-of-work
    #[error("Not a proof-of-work")]
    NotProofOfWork,

    #[error("Wrong proof-of-work level: given {given} zeros, required was {required} zeros")]
    InsufficientDifficulty { given: u32, required: u32 },

    // Dates
    #[error("Root block's Date and ConfirmedDate must be equal")]
    RootDatesMismatch,

    #[error("Date field cannot be lower than previous block's ConfirmedDate")]
    DateBelowConfirmed,

    #[error("ConfirmedDate must be equal to previous block's ConfirmedDate")]
    ConfirmedDateMismatch,

    #[error("ConfirmedDate must be equal to Date for a confirming block")]
    ConfirmationRequired,

    // Memberships & certifications
    #[error("All kicked members must be present under Excluded members")]
    KickedNotExcluded,

    #[error("Orphan signatures found (not linked with membership)")]
    OrphanSignature,

    #[error("Orphan membership found (not linked with signature)")]
    OrphanMembership,

    #[error("Orphan pubkey: requires a membership")]
    OrphanPubkey,

    #[error("Bad signature for document")]
    WrongMembershipSignature,

    #[error("One and only one UserID required & allowed for a pubkey")]
    WrongUserIdCount,

    #[error("Only one self certification allowed for a key")]
    WrongSelfCertificationCount,

    #[error("No tier-certification allowed for root block")]
    RootWithTierCertification,

    #[error("A key cannot certify itself")]
    SelfCertification,

    #[error("Wrong signature for certification")]
    WrongCertificationSignature,

    #[error("Certification from non-member")]
    CertificationFromNonMember,

    #[error("Certification to non-member")]
    CertificationToNonMember,

    #[error("Identity already used")]
    IdentityAlreadyUsed,

    #[error("Pubkey already used")]
    PubkeyAlreadyUsed,

    #[error("Too early for this certification")]
    CertificationReplay,

    #[error("Joiner does not gather enough certifications")]
    NotEnoughCertifications,

    #[error("Joiner is outdistanced from WoT")]
    OutdistancedJoiner,

    // Community changes
    #[error("Wrong members changes")]
    WrongMembersChanges,

    #[error("Wrong members count")]
    WrongMembersCount,

    // Universal dividend
    #[error("Root block cannot have UniversalDividend field")]
    RootWithDividend,

    #[error("Block must have a UniversalDividend field")]
    MissingDividend,

    #[error("UniversalDividend must be equal to {expected}")]
    WrongDividendValue { expected: u64 },

    #[error("This block cannot have UniversalDividend since ConfirmedDate has not changed")]
    DividendWithoutDateChange,

    #[error("This block cannot have UniversalDividend")]
    IllegitimateDividend,

    // Transaction sources
    #[error("Source {0} does not exist")]
    SourceNotFound(SourceRef),

    #[error("Source {0} is not available")]
    SourceNotAvailable(SourceRef),
}

/// Outcome of validating one candidate block.
///
/// `Rejected` is a deliberate consensus verdict; `Indeterminate` means
/// an external collaborator failed and the caller may re-validate the
/// identical candidate against refreshed state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error(transparent)]
    Rejected(#[from] RejectionReason),

    #[error("Indeterminate: {0}")]
    Indeterminate(#[from] StoreError),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

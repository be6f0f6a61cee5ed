//! # wc-consensus
//!
//! Block validation / consensus engine for the wotchain node.
//!
//! ## Architecture
//!
//! A candidate block, already parsed by the document layer, is judged
//! against the node's chain state through a fixed sequence of coherence
//! checks: chain linkage, proof-of-work, date confirmation, kicked
//! members, membership/certification coherence, certifier eligibility,
//! members-changes coherence, universal dividend, and transaction
//! sources. The first failing check rejects the block with a stable
//! reason; an accepted block is left for the storage layer to commit.
//!
//! ```text
//! candidate block ──→ [BlockValidator] ──→ Ok(()) | Err(reason)
//!                          │
//!            ┌─────────────┼──────────────┬───────────────┐
//!            ↓             ↓              ↓               ↓
//!      [ChainStore] [TrustGraphStore] [SourceStore] [SignatureVerifier]
//! ```
//!
//! The engine is read-only over chain state: all queries go to
//! height-pinned snapshot stores behind the outbound ports, so a
//! validation is deterministic and can be replayed against refreshed
//! state. Infrastructure faults surface as an indeterminate outcome,
//! never as a consensus rejection.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use wc_consensus::{BlockValidator, ValidatorDependencies};
//! use wc_consensus::domain::ProtocolParameters;
//!
//! let validator = BlockValidator::new(ValidatorDependencies {
//!     chain,
//!     wot,
//!     sources,
//!     verifier,
//!     params: ProtocolParameters::default(),
//! });
//!
//! validator.validate(&block).await?;
//! ```

pub mod domain;
pub mod ports;
pub mod service;

// Re-export main types
pub use domain::{
    Block, CertLink, DividendBlock, HeadBlock, IssuerBlock, MemberChange, Membership,
    MembershipSignature, MembershipStatus, ProtocolParameters, PublicKeyBundle, RejectionReason,
    SourceKind, SourceRef, TierCertification, Transaction, ValidationError, ValidationResult,
};
pub use ports::{ChainStore, SignatureVerifier, SourceStore, TrustGraphStore, ValidationApi};
pub use service::{BlockValidator, ValidatorDependencies};

//! Driven ports (outbound dependencies)
//!
//! The engine reads chain state exclusively through these traits. An
//! implementation is expected to answer for a fixed snapshot height:
//! the orchestrator never mutates anything, and committing an accepted
//! block (membership table, link table, spent-source table) is the
//! backend's own transactional concern.

use crate::domain::{CertLink, DividendBlock, HeadBlock, IssuerBlock, SourceKind, SourceRef};
use async_trait::async_trait;
use shared_types::{Fingerprint, StoreError};

/// Chain-state store: head block and per-issuer / dividend history.
#[async_trait]
pub trait ChainStore: Send + Sync {
    /// The current head, or `None` before the root block is committed.
    async fn current_block(&self) -> Result<Option<HeadBlock>, StoreError>;

    /// The most recent block produced by `issuer`, if any.
    async fn last_block_of_issuer(
        &self,
        issuer: &Fingerprint,
    ) -> Result<Option<IssuerBlock>, StoreError>;

    /// The last block that carried a universal dividend, if any.
    async fn last_dividend_block(&self) -> Result<Option<DividendBlock>, StoreError>;
}

/// Trust-graph store: membership status and certification links.
#[async_trait]
pub trait TrustGraphStore: Send + Sync {
    async fn is_member(&self, key: &Fingerprint) -> Result<bool, StoreError>;

    /// The full member set at the snapshot height.
    async fn members(&self) -> Result<Vec<Fingerprint>, StoreError>;

    /// Members whose links have gone obsolete and who must be excluded
    /// by the next block.
    async fn to_be_kicked(&self) -> Result<Vec<Fingerprint>, StoreError>;

    /// Timestamp of an existing `from` -> `to` certification, if one was
    /// ever recorded (obsolete or not). Drives the replay window.
    async fn existing_link(
        &self,
        from: &Fingerprint,
        to: &Fingerprint,
    ) -> Result<Option<u64>, StoreError>;

    /// Valid (non-obsolete) links certifying `target`.
    async fn valid_links_to(&self, target: &Fingerprint) -> Result<Vec<CertLink>, StoreError>;

    /// Valid (non-obsolete) links issued by `issuer`.
    async fn valid_links_from(&self, issuer: &Fingerprint) -> Result<Vec<CertLink>, StoreError>;

    /// Whether a user-id is already bound to some key in chain history.
    async fn identity_exists(&self, user_id: &str) -> Result<bool, StoreError>;

    /// Whether a key already appears in chain history.
    async fn pubkey_exists(&self, key: &Fingerprint) -> Result<bool, StoreError>;
}

/// Source store: the double-spend ledger.
#[async_trait]
pub trait SourceStore: Send + Sync {
    /// Whether chain history recorded this source at its origin.
    async fn source_exists(
        &self,
        kind: SourceKind,
        origin_number: u64,
        origin_fingerprint: &Fingerprint,
    ) -> Result<bool, StoreError>;

    /// Whether the source is still unconsumed for its owner at the
    /// stated amount.
    async fn source_available(&self, source: &SourceRef) -> Result<bool, StoreError>;
}

/// Detached-signature verifier.
///
/// Resolves key material for `key` itself; the engine only supplies the
/// exact message bytes and the signature text.
pub trait SignatureVerifier: Send + Sync {
    fn verify(&self, message: &[u8], signature: &str, key: &Fingerprint) -> bool;
}

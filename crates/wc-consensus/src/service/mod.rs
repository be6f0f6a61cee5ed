//! Block validation service
//!
//! The orchestrator: wires the outbound stores and the signature
//! verifier to the domain checkers, in the protocol's fixed order,
//! stopping at the first failure. It never mutates chain state;
//! committing an accepted block is the storage layer's transactional
//! concern.
//!
//! Independent sub-checks (per-membership eligibility, per-source
//! lookups) fan out concurrently and are joined before the next ordered
//! check; failures are reported in input order so the verdict does not
//! depend on completion order.

use crate::domain::{
    self, Block, CertLink, HeadBlock, MatchedMembership, ProtocolParameters, RejectionReason,
    SourceRef, ValidationResult, WotGraph,
};
use crate::ports::{ChainStore, SignatureVerifier, SourceStore, TrustGraphStore, ValidationApi};
use async_trait::async_trait;
use futures::future::join_all;
use shared_types::{Fingerprint, StoreError};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};


/// Dependencies for [`BlockValidator`].
pub struct ValidatorDependencies<C, T, S, V> {
    pub chain: Arc<C>,
    pub wot: Arc<T>,
    pub sources: Arc<S>,
    pub verifier: Arc<V>,
    pub params: ProtocolParameters,
}

/// The block validation orchestrator.
pub struct BlockValidator<C, T, S, V>
where
    C: ChainStore,
    T: TrustGraphStore,
    S: SourceStore,
    V: SignatureVerifier,
{
    chain: Arc<C>,
    wot: Arc<T>,
    sources: Arc<S>,
    verifier: Arc<V>,
    params: ProtocolParameters,
}

impl<C, T, S, V> BlockValidator<C, T, S, V>
where
    C: ChainStore,
    T: TrustGraphStore,
    S: SourceStore,
    V: SignatureVerifier,
{
    pub fn new(deps: ValidatorDependencies<C, T, S, V>) -> Self {
        Self {
            chain: deps.chain,
            wot: deps.wot,
            sources: deps.sources,
            verifier: deps.verifier,
            params: deps.params,
        }
    }

    /// Judge a candidate block against the current chain state.
    ///
    /// Checks run in the protocol's fixed order; the first failure is
    /// the verdict.
    pub async fn validate(&self, block: &Block) -> ValidationResult<()> {
        debug!(number = block.number, hash = %block.hash, "validating candidate block");
        let head = self.chain.current_block().await?;
        domain::check_linkage(block, head.as_ref())?;
        self.proof_of_work(block).await?;
        domain::check_dates(&self.params, block, head.as_ref())?;
        self.kicked_members(block).await?;
        self.membership_coherence(block).await?;
        self.certifier_eligibility(block).await?;
        self.community_changes(block, head.as_ref()).await?;
        self.dividend(block, head.as_ref()).await?;
        self.transaction_sources(block).await?;
        info!(number = block.number, hash = %block.hash, "block accepted");
        Ok(())
    }

    /// Proof-of-work check in isolation.
    pub async fn check_proof_of_work(&self, block: &Block) -> ValidationResult<()> {
        self.proof_of_work(block).await
    }

    /// Date confirmation check in isolation.
    pub async fn check_dates(&self, block: &Block) -> ValidationResult<()> {
        let head = self.chain.current_block().await?;
        domain::check_dates(&self.params, block, head.as_ref())?;
        Ok(())
    }

    /// Universal dividend check in isolation.
    pub async fn check_dividend(&self, block: &Block) -> ValidationResult<()> {
        let head = self.chain.current_block().await?;
        self.dividend(block, head.as_ref()).await
    }

    /// Transaction source check in isolation.
    pub async fn check_transactions(&self, block: &Block) -> ValidationResult<()> {
        self.transaction_sources(block).await
    }

    async fn proof_of_work(&self, block: &Block) -> ValidationResult<()> {
        let last = self.chain.last_block_of_issuer(&block.issuer).await?;
        domain::check_proof_of_work(&self.params, &block.hash, block.number, last.as_ref())?;
        Ok(())
    }

    async fn kicked_members(&self, block: &Block) -> ValidationResult<()> {
        let kicked = self.wot.to_be_kicked().await?;
        domain::check_kicked(block, &kicked)?;
        Ok(())
    }

    /// Ordered check 5: membership/certification coherence.
    async fn membership_coherence(&self, block: &Block) -> ValidationResult<()> {
        let matched = domain::match_memberships(block)?;
        domain::check_bundle_memberships(block)?;
        // Memberships are independent of one another: fan out, then
        // report failures in input order.
        let results = join_all(matched.iter().map(|m| self.check_membership(block, m))).await;
        for result in results {
            result?;
        }
        Ok(())
    }

    async fn check_membership(
        &self,
        block: &Block,
        matched: &MatchedMembership<'_>,
    ) -> ValidationResult<()> {
        let payload = matched.membership.signed_payload(&self.params.currency);
        if !self
            .verifier
            .verify(payload.as_bytes(), &matched.signature.signature, matched.fingerprint())
        {
            return Err(RejectionReason::WrongMembershipSignature.into());
        }
        if !matched.is_joining() {
            // Leaving simply removes the member.
            return Ok(());
        }
        self.check_joiner(block, matched.fingerprint()).await
    }

    async fn check_joiner(&self, block: &Block, joiner: &Fingerprint) -> ValidationResult<()> {
        if let Some(bundle) = block.bundle_for(joiner) {
            domain::check_bundle_shape(bundle)?;
            if self.wot.pubkey_exists(joiner).await? {
                return Err(RejectionReason::PubkeyAlreadyUsed.into());
            }
            if let Some(user_id) = bundle.user_id() {
                if self.wot.identity_exists(user_id).await? {
                    return Err(RejectionReason::IdentityAlreadyUsed.into());
                }
            }
        }

        let certs = block.certifications_for(joiner);
        if block.is_root() {
            // No member exists yet to vouch for anyone.
            if block.certifications().next().is_some() {
                return Err(RejectionReason::RootWithTierCertification.into());
            }
            return Ok(());
        }

        let user_id = block
            .bundle_for(joiner)
            .and_then(|b| b.user_id())
            .unwrap_or_default();
        for cert in &certs {
            let payload = cert.signed_payload(user_id);
            if !self
                .verifier
                .verify(payload.as_bytes(), &cert.signature, &cert.issuer)
            {
                return Err(RejectionReason::WrongCertificationSignature.into());
            }
            if !self.wot.is_member(&cert.issuer).await? {
                return Err(RejectionReason::CertificationFromNonMember.into());
            }
            if let Some(link_ts) = self.wot.existing_link(&cert.issuer, joiner).await? {
                if block.date < link_ts + self.params.sig_delay {
                    return Err(RejectionReason::CertificationReplay.into());
                }
            }
        }

        let stored = self.wot.valid_links_to(joiner).await?;
        if stored.len() + certs.len() < self.params.sig_qty {
            return Err(RejectionReason::NotEnoughCertifications.into());
        }

        let members = self.wot.members().await?;
        let graph = self.collect_links(block, joiner).await?;
        if graph.is_outdistanced(joiner, &members, self.params.step_max) {
            return Err(RejectionReason::OutdistancedJoiner.into());
        }
        Ok(())
    }

    /// Collect certification edges around `joiner`: in-block
    /// certifications plus stored links, expanded frontier by frontier
    /// up to the hop bound.
    async fn collect_links(
        &self,
        block: &Block,
        joiner: &Fingerprint,
    ) -> Result<WotGraph, StoreError> {
        let mut graph = WotGraph::new();
        for cert in block.certifications() {
            graph.add_link(cert.issuer.clone(), cert.target.clone());
        }
        let mut seen: HashSet<Fingerprint> = HashSet::new();
        seen.insert(joiner.clone());
        let mut frontier = vec![joiner.clone()];
        for _ in 0..self.params.step_max {
            let fetched = join_all(frontier.iter().map(|node| self.wot.valid_links_to(node))).await;
            for links in fetched {
                for CertLink { source, target, .. } in links? {
                    graph.add_link(source, target);
                }
            }
            frontier = graph
                .certifiers_within(joiner, self.params.step_max)
                .into_iter()
                .filter(|node| seen.insert(node.clone()))
                .collect();
            if frontier.is_empty() {
                break;
            }
        }
        Ok(graph)
    }

    /// Ordered check 6: only current, staying members may certify, and
    /// only members or in-block joiners may be certified.
    async fn certifier_eligibility(&self, block: &Block) -> ValidationResult<()> {
        if block.is_root() {
            return Ok(());
        }
        let leavers: HashSet<&Fingerprint> = block.leavers().collect();
        for cert in block.certifications() {
            if cert.issuer == cert.target {
                return Err(RejectionReason::SelfCertification.into());
            }
            if leavers.contains(&cert.issuer) || !self.wot.is_member(&cert.issuer).await? {
                return Err(RejectionReason::CertificationFromNonMember.into());
            }
            let target_joins = block.joiners().any(|j| j == &cert.target);
            if !target_joins && !self.wot.is_member(&cert.target).await? {
                return Err(RejectionReason::CertificationToNonMember.into());
            }
        }
        Ok(())
    }

    async fn community_changes(
        &self,
        block: &Block,
        head: Option<&HeadBlock>,
    ) -> ValidationResult<()> {
        let matched = domain::match_memberships(block)?;
        let kicked = self.wot.to_be_kicked().await?;
        domain::check_community_changes(block, head, &kicked, &matched)?;
        Ok(())
    }

    async fn dividend(&self, block: &Block, head: Option<&HeadBlock>) -> ValidationResult<()> {
        let last = self.chain.last_dividend_block().await?;
        domain::check_dividend(&self.params, block, head, last.as_ref())?;
        Ok(())
    }

    async fn transaction_sources(&self, block: &Block) -> ValidationResult<()> {
        let results =
            join_all(block.consumed_sources().map(|source| self.check_source(source))).await;
        for result in results {
            result?;
        }
        Ok(())
    }

    async fn check_source(&self, source: &SourceRef) -> ValidationResult<()> {
        let exists = self
            .sources
            .source_exists(source.kind, source.origin_number, &source.origin_fingerprint)
            .await?;
        if !exists {
            return Err(RejectionReason::SourceNotFound(source.clone()).into());
        }
        if !self.sources.source_available(source).await? {
            return Err(RejectionReason::SourceNotAvailable(source.clone()).into());
        }
        Ok(())
    }
}

#[async_trait]
impl<C, T, S, V> ValidationApi for BlockValidator<C, T, S, V>
where
    C: ChainStore,
    T: TrustGraphStore,
    S: SourceStore,
    V: SignatureVerifier,
{
    async fn validate(&self, block: &Block) -> ValidationResult<()> {
        Self::validate(self, block).await
    }

    async fn check_proof_of_work(&self, block: &Block) -> ValidationResult<()> {
        Self::check_proof_of_work(self, block).await
    }

    async fn check_dates(&self, block: &Block) -> ValidationResult<()> {
        Self::check_dates(self, block).await
    }

    async fn check_dividend(&self, block: &Block) -> ValidationResult<()> {
        Self::check_dividend(self, block).await
    }

    async fn check_transactions(&self, block: &Block) -> ValidationResult<()> {
        Self::check_transactions(self, block).await
    }
}

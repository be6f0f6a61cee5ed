//! Web-of-Trust distance
//!
//! A joiner must sit close to the existing member set: every member has
//! to reach the joiner through a chain of at most `step_max`
//! certification links. The orchestrator collects the relevant links
//! (stored plus in-block) into a [`WotGraph`] and asks the reachability
//! question here, keeping the search itself pure.

use serde::{Deserialize, Serialize};
use shared_types::Fingerprint;
use std::collections::{HashMap, HashSet};

/// A valid (non-obsolete) certification link between two keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertLink {
    pub source: Fingerprint,
    pub target: Fingerprint,
    pub timestamp: u64,
}

/// In-memory view of certification edges around a joiner.
#[derive(Debug, Default)]
pub struct WotGraph {
    /// target -> keys that certified it
    certifiers: HashMap<Fingerprint, HashSet<Fingerprint>>,
}

impl WotGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_link(&mut self, source: Fingerprint, target: Fingerprint) {
        self.certifiers.entry(target).or_default().insert(source);
    }

    /// Keys that reach `target` in at most `steps` certification hops.
    pub fn certifiers_within(&self, target: &Fingerprint, steps: u32) -> HashSet<Fingerprint> {
        let mut reached = HashSet::new();
        let mut frontier = vec![target.clone()];
        for _ in 0..steps {
            let mut next = Vec::new();
            for node in frontier {
                let Some(sources) = self.certifiers.get(&node) else {
                    continue;
                };
                for source in sources {
                    if reached.insert(source.clone()) {
                        next.push(source.clone());
                    }
                }
            }
            if next.is_empty() {
                break;
            }
            frontier = next;
        }
        reached
    }

    /// True when some member cannot reach `target` within `steps` hops.
    pub fn is_outdistanced(
        &self,
        target: &Fingerprint,
        members: &[Fingerprint],
        steps: u32,
    ) -> bool {
        let reached = self.certifiers_within(target, steps);
        members
            .iter()
            .any(|member| member != target && !reached.contains(member))
    }
}

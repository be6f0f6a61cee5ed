//! Driving port (inbound API)

use crate::domain::{Block, ValidationResult};
use async_trait::async_trait;

/// Primary validation API.
///
/// `validate` runs the full ordered check sequence and stops at the
/// first failure. The narrower entry points run one checker in
/// isolation over the same snapshot and result shape; tests and tooling
/// use them to probe a single rule.
#[async_trait]
pub trait ValidationApi: Send + Sync {
    /// Judge a candidate block against the current chain state.
    async fn validate(&self, block: &Block) -> ValidationResult<()>;

    /// Proof-of-work check only.
    async fn check_proof_of_work(&self, block: &Block) -> ValidationResult<()>;

    /// Date confirmation check only.
    async fn check_dates(&self, block: &Block) -> ValidationResult<()>;

    /// Universal dividend check only.
    async fn check_dividend(&self, block: &Block) -> ValidationResult<()>;

    /// Transaction source check only.
    async fn check_transactions(&self, block: &Block) -> ValidationResult<()>;
}

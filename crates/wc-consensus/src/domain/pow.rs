//! Proof-of-work difficulty
//!
//! Difficulty is personal: an issuer who just produced a block faces the
//! highest requirement, and sheds one zero for every `pow_period` blocks
//! written since their last one, never dropping below `pow_zero_min`.
//! The baseline is the difficulty of the issuer's own previous block
//! plus `pow_step`.

use super::{IssuerBlock, ProtocolParameters, RejectionReason};
use shared_types::BlockHash;

/// Number of leading hash zeros required of an issuer at height
/// `number`, given that issuer's most recent prior block.
pub fn required_zeros(
    params: &ProtocolParameters,
    number: u64,
    last: Option<&IssuerBlock>,
) -> u32 {
    let Some(last) = last else {
        // First-ever block by this issuer, root included.
        return params.pow_zero_min;
    };
    let waited = number.saturating_sub(last.number);
    let periods = (waited / params.pow_period) as u32;
    let baseline = last.hash.leading_zeros() + params.pow_step;
    baseline.saturating_sub(periods).max(params.pow_zero_min)
}

/// Verify a candidate's hash against its issuer's required difficulty.
pub fn check_proof_of_work(
    params: &ProtocolParameters,
    hash: &BlockHash,
    number: u64,
    last: Option<&IssuerBlock>,
) -> Result<(), RejectionReason> {
    let given = hash.leading_zeros();
    if given == 0 {
        return Err(RejectionReason::NotProofOfWork);
    }
    let required = required_zeros(params, number, last);
    if given < required {
        return Err(RejectionReason::InsufficientDifficulty { given, required });
    }
    Ok(())
}

//! Protocol parameters

use serde::{Deserialize, Serialize};

/// Currency-wide protocol parameters.
///
/// Fixed at currency creation and shared by every node; all checkers
/// read them. Defaults match the reference calibration used by the
/// scenario tests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProtocolParameters {
    /// Currency name, part of every signed document payload.
    pub currency: String,
    /// Minimum delay (seconds) before an issuer may renew a
    /// certification for the same target.
    pub sig_delay: u64,
    /// Minimum number of certifications required to join the WoT.
    pub sig_qty: usize,
    /// Floor for the number of leading hash zeros required of a block.
    pub pow_zero_min: u32,
    /// Number of blocks an issuer waits to shed one zero of difficulty.
    pub pow_period: u64,
    /// Zeros added on top of an issuer's previous difficulty before the
    /// per-period decay applies.
    pub pow_step: u32,
    /// Consecutive declarations after which a new date must be confirmed.
    pub inc_date_min: u64,
    /// Minimum confirmed-date distance (seconds) between two dividends.
    pub dt: u64,
    /// Value of the very first universal dividend.
    pub ud0: u64,
    /// Dividend growth rate.
    pub c: f64,
    /// Maximum certification-path length from any member to a joiner.
    pub step_max: u32,
}

impl Default for ProtocolParameters {
    fn default() -> Self {
        Self {
            currency: "beta_brousouf".to_string(),
            sig_delay: 31_557_600, // 365.25 days
            sig_qty: 1,
            pow_zero_min: 1,
            pow_period: 18,
            pow_step: 1,
            inc_date_min: 10,
            dt: 100,
            ud0: 100,
            c: 0.1,
            step_max: 1,
        }
    }
}

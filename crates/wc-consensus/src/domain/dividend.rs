//! Universal dividend rules
//!
//! A dividend may only be issued when the chain has just agreed on a new
//! date and at least `dt` seconds of confirmed time separate it from the
//! previous dividend. When those conditions hold the block MUST carry
//! the dividend, and its value is fully determined by the monetary
//! state: `ceil(max(previous_dividend, c * monetary_mass / members))`.

use super::{Block, DividendBlock, HeadBlock, ProtocolParameters, RejectionReason};

/// Validate the presence/absence and exact value of a block's dividend.
pub fn check_dividend(
    params: &ProtocolParameters,
    block: &Block,
    head: Option<&HeadBlock>,
    last_dividend: Option<&DividendBlock>,
) -> Result<(), RejectionReason> {
    if block.is_root() {
        if block.dividend.is_some() {
            return Err(RejectionReason::RootWithDividend);
        }
        return Ok(());
    }

    let Some(head) = head else {
        return Err(RejectionReason::RootRequired);
    };

    let elapsed = match last_dividend {
        None => true,
        Some(last) => head.confirmed_date >= last.confirmed_date + params.dt,
    };

    match block.dividend {
        Some(value) => {
            if !head.confirmed_date_changed {
                return Err(RejectionReason::DividendWithoutDateChange);
            }
            if !elapsed {
                return Err(RejectionReason::IllegitimateDividend);
            }
            let expected = expected_dividend(params, block.members_count, last_dividend);
            if value != expected {
                return Err(RejectionReason::WrongDividendValue { expected });
            }
            Ok(())
        }
        None => {
            if head.confirmed_date_changed && elapsed {
                return Err(RejectionReason::MissingDividend);
            }
            Ok(())
        }
    }
}

/// The protocol-computed dividend value.
pub fn expected_dividend(
    params: &ProtocolParameters,
    members_count: u64,
    last_dividend: Option<&DividendBlock>,
) -> u64 {
    let Some(last) = last_dividend else {
        return params.ud0;
    };
    if members_count == 0 {
        return last.dividend;
    }
    let per_member = params.c * last.monetary_mass as f64 / members_count as f64;
    (last.dividend as f64).max(per_member).ceil() as u64
}

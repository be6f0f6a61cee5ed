//! Date confirmation rules
//!
//! The chain agrees on time lazily: blocks may declare a new date, and
//! once the same new date has been declared `inc_date_min` times in a
//! row the block closing the streak must confirm it by setting
//! ConfirmedDate equal to Date. Until then the confirmed date is frozen.

use super::{Block, HeadBlock, ProtocolParameters, RejectionReason};

/// Validate a candidate's Date/ConfirmedDate pair against the head.
pub fn check_dates(
    params: &ProtocolParameters,
    block: &Block,
    head: Option<&HeadBlock>,
) -> Result<(), RejectionReason> {
    if block.is_root() {
        if block.date != block.confirmed_date {
            return Err(RejectionReason::RootDatesMismatch);
        }
        return Ok(());
    }

    let Some(head) = head else {
        return Err(RejectionReason::RootRequired);
    };

    if block.date < head.confirmed_date {
        return Err(RejectionReason::DateBelowConfirmed);
    }

    if is_confirming(params, block, head) {
        if block.confirmed_date != block.date {
            return Err(RejectionReason::ConfirmationRequired);
        }
    } else if block.confirmed_date != head.confirmed_date {
        return Err(RejectionReason::ConfirmedDateMismatch);
    }
    Ok(())
}

/// A block confirms a new date when it is the `inc_date_min`-th
/// consecutive declaration of the head's date.
fn is_confirming(params: &ProtocolParameters, block: &Block, head: &HeadBlock) -> bool {
    block.date == head.date && head.new_date_nth + 1 >= params.inc_date_min
}

pub mod address;
pub mod compute;
pub mod token;
pub mod validation;

use anchor_lang::prelude::*;
use crate::constants::PERCENTAGE_DENOMINATOR;
use crate::errors::MarketplaceError;

pub fn safe_add(a: u64, b: u64) -> Result<u64> {
    a.checked_add(b).ok_or(MarketplaceError::MathOverflow.into())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoyaltySplit {
    pub seller_amount: u64,
    pub royalty_amount: u64,
}

/// royalty = floor(price * pct / 100), seller gets the remainder.
pub fn split_resale_payment(price: u64, royalty_percentage: u8) -> Result<RoyaltySplit> {
    let royalty = (price as u128)
        .checked_mul(royalty_percentage as u128)
        .ok_or(MarketplaceError::RoyaltySplitOverflow)?
        .checked_div(PERCENTAGE_DENOMINATOR)
        .ok_or(MarketplaceError::RoyaltySplitOverflow)?;

    let royalty_amount: u64 = royalty
        .try_into()
        .map_err(|_| MarketplaceError::RoyaltySplitOverflow)?;

    let seller_amount = price
        .checked_sub(royalty_amount)
        .ok_or(MarketplaceError::RoyaltySplitOverflow)?;

    Ok(RoyaltySplit {
        seller_amount,
        royalty_amount,
    })
}

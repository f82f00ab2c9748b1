use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::MarketplaceError;
use crate::state::ServiceMetadata;

pub fn validate_royalty_percentage(royalty_percentage: u8) -> Result<()> {
    require!(
        royalty_percentage <= MAX_ROYALTY_PERCENTAGE,
        MarketplaceError::InvalidRoyalty
    );
    Ok(())
}

pub fn validate_price(price: u64) -> Result<()> {
    require!(price > 0, MarketplaceError::InvalidPrice);
    Ok(())
}

pub fn validate_metadata(metadata: &ServiceMetadata) -> Result<()> {
    require!(
        metadata.name.len() <= MAX_NAME_LEN,
        MarketplaceError::NameTooLong
    );

    require!(
        metadata.description.len() <= MAX_DESCRIPTION_LEN,
        MarketplaceError::DescriptionTooLong
    );

    validate_price(metadata.price)
}

/// Holding exactly the one ownership unit is the proof of ownership.
pub fn validate_ownership(ownership_balance: u64) -> Result<()> {
    require!(
        ownership_balance == OWNERSHIP_TOKEN_SUPPLY,
        MarketplaceError::NotOwner
    );
    Ok(())
}

use anchor_lang::prelude::*;
use crate::constants::{MAX_DESCRIPTION_LEN, MAX_NAME_LEN};
use crate::errors::MarketplaceError;
use crate::utils::validation::validate_price;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Default, Debug, PartialEq, Eq)]
pub struct ServiceMetadata {
    pub name: String,
    pub description: String,
    pub price: u64,
    pub is_soulbound: bool,
}

impl ServiceMetadata {
    pub const SIZE: usize = (4 + MAX_NAME_LEN) +   // name
        (4 + MAX_DESCRIPTION_LEN) +                 // description
        8 +                                         // price
        1;                                          // is_soulbound
}

/// A listed service. The current owner is whoever holds the single unit of
/// `mint`.
#[account]
pub struct Service {
    pub vendor: Pubkey,             // 32 bytes - original lister
    pub metadata: ServiceMetadata,  // variable, bounded by ServiceMetadata::SIZE
    pub mint: Pubkey,               // 32 bytes - ownership token mint (PDA)
    pub is_available: bool,         // 1 byte - true until first purchase
    pub mint_bump: u8,              // 1 byte
}

impl Service {
    pub const SIZE: usize = 32 + ServiceMetadata::SIZE + 32 + 1 + 1;

    pub fn ensure_available(&self) -> Result<()> {
        require!(self.is_available, MarketplaceError::ServiceUnavailable);
        Ok(())
    }

    /// Primary sale transition. Never reversed.
    pub fn mark_purchased(&mut self) -> Result<()> {
        self.ensure_available()?;
        self.is_available = false;
        Ok(())
    }

    pub fn ensure_resellable(&self) -> Result<()> {
        require!(!self.metadata.is_soulbound, MarketplaceError::Soulbound);
        Ok(())
    }

    /// Records a completed resale and returns the price that changed hands.
    pub fn apply_resale(&mut self, new_price: u64) -> Result<u64> {
        self.ensure_resellable()?;
        validate_price(new_price)?;

        let paid = self.metadata.price;
        self.metadata.price = new_price;
        Ok(paid)
    }
}

use anchor_lang::prelude::*;
use crate::utils::{safe_add, split_resale_payment, RoyaltySplit};

#[account]
pub struct Marketplace {
    pub authority: Pubkey,          // 32 bytes
    pub service_count: u64,         // 8 bytes - successful listings so far
    pub royalty_percentage: u8,     // 1 byte - applied to resales only
    pub bump: u8,                   // 1 byte
}

impl Marketplace {
    pub const SIZE: usize = 32 + 8 + 1 + 1;

    /// A freshly allocated record is all zeroes, so a default authority means
    /// `initialize_marketplace` has not run yet.
    pub fn is_initialized(&self) -> bool {
        self.authority != Pubkey::default()
    }

    /// Bumps the listing counter and returns the new count.
    pub fn record_listing(&mut self) -> Result<u64> {
        self.service_count = safe_add(self.service_count, 1)?;
        Ok(self.service_count)
    }

    pub fn royalty_split(&self, price: u64) -> Result<RoyaltySplit> {
        split_resale_payment(price, self.royalty_percentage)
    }
}

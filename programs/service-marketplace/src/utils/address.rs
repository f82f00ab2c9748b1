use anchor_lang::prelude::*;
use crate::constants::{MARKETPLACE_SEED, SERVICE_MINT_SEED};

/// Derive the marketplace registry PDA
pub fn find_marketplace_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[MARKETPLACE_SEED], &crate::ID)
}

/// Derive the ownership token mint bound to a service. Anyone can recompute
/// this to check that a service points at the mint it should.
pub fn find_service_mint_address(service: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[SERVICE_MINT_SEED, service.as_ref()], &crate::ID)
}

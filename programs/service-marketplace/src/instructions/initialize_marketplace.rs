use anchor_lang::prelude::*;
use crate::constants::MARKETPLACE_SEED;
use crate::errors::MarketplaceError;
use crate::state::Marketplace;
use crate::utils::validation::validate_royalty_percentage;

#[derive(Accounts)]
pub struct InitializeMarketplace<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    // Repeat calls land in the handler and fail with AlreadyInitialized
    #[account(
        init_if_needed,
        payer = authority,
        seeds = [MARKETPLACE_SEED],
        bump,
        space = 8 + Marketplace::SIZE,
    )]
    pub marketplace: Account<'info, Marketplace>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_marketplace(
    ctx: Context<InitializeMarketplace>,
    royalty_percentage: u8,
) -> Result<()> {
    validate_royalty_percentage(royalty_percentage)?;

    let marketplace = &mut ctx.accounts.marketplace;
    require!(
        !marketplace.is_initialized(),
        MarketplaceError::AlreadyInitialized
    );

    marketplace.authority = ctx.accounts.authority.key();
    marketplace.service_count = 0;
    marketplace.royalty_percentage = royalty_percentage;
    marketplace.bump = ctx.bumps.marketplace;

    emit!(MarketplaceInitialized {
        marketplace: marketplace.key(),
        authority: marketplace.authority,
        royalty_percentage,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Marketplace initialized with {}% resale royalty", royalty_percentage);

    Ok(())
}

#[event]
pub struct MarketplaceInitialized {
    pub marketplace: Pubkey,
    pub authority: Pubkey,
    pub royalty_percentage: u8,
    pub timestamp: i64,
}

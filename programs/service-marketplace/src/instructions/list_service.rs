use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token};
use crate::constants::*;
use crate::state::{Marketplace, Service, ServiceMetadata};
use crate::utils::validation::validate_metadata;

#[derive(Accounts)]
pub struct ListService<'info> {
    #[account(mut)]
    pub vendor: Signer<'info>,

    #[account(
        mut,
        seeds = [MARKETPLACE_SEED],
        bump = marketplace.bump,
    )]
    pub marketplace: Account<'info, Marketplace>,

    #[account(
        init,
        payer = vendor,
        space = 8 + Service::SIZE,
    )]
    pub service: Account<'info, Service>,

    // `init` rejects an existing account at this address, so a service
    // identity can only ever be bound to one mint. Supply stays 0 until the
    // first purchase mints the single unit.
    #[account(
        init,
        payer = vendor,
        seeds = [SERVICE_MINT_SEED, service.key().as_ref()],
        bump,
        mint::decimals = OWNERSHIP_TOKEN_DECIMALS,
        mint::authority = mint.key(),
    )]
    pub mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn list_service(ctx: Context<ListService>, metadata: ServiceMetadata) -> Result<()> {
    validate_metadata(&metadata)?;

    let price = metadata.price;
    let is_soulbound = metadata.is_soulbound;

    let service = &mut ctx.accounts.service;
    service.vendor = ctx.accounts.vendor.key();
    service.metadata = metadata;
    service.mint = ctx.accounts.mint.key();
    service.is_available = true;
    service.mint_bump = ctx.bumps.mint;

    let service_count = ctx.accounts.marketplace.record_listing()?;

    emit!(ServiceListed {
        vendor: ctx.accounts.vendor.key(),
        service: ctx.accounts.service.key(),
        mint: ctx.accounts.mint.key(),
        price,
        is_soulbound,
        service_count,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!(
        "Service {} listed at price {} (mint {})",
        ctx.accounts.service.key(),
        price,
        ctx.accounts.mint.key()
    );

    Ok(())
}

#[event]
pub struct ServiceListed {
    pub vendor: Pubkey,
    pub service: Pubkey,
    pub mint: Pubkey,
    pub price: u64,
    pub is_soulbound: bool,
    pub service_count: u64,
    pub timestamp: i64,
}

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};
use crate::constants::*;
use crate::errors::MarketplaceError;
use crate::state::Service;
use crate::utils::compute::log_compute_checkpoint;
use crate::utils::token::{mint_ownership_token, revoke_mint_authority, transfer_payment};

#[derive(Accounts)]
pub struct PurchaseService<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

    #[account(
        mut,
        has_one = vendor @ MarketplaceError::VendorMismatch,
        has_one = mint @ MarketplaceError::MintMismatch,
    )]
    pub service: Account<'info, Service>,

    /// CHECK: Identity only, matched against service.vendor
    pub vendor: UncheckedAccount<'info>,

    #[account(mut)]
    pub mint: Account<'info, Mint>,

    #[account(
        mut,
        constraint = buyer_token_account.owner == buyer.key() @ MarketplaceError::TokenAccountOwnerMismatch,
        constraint = buyer_token_account.mint != mint.key() @ MarketplaceError::PaymentMintMismatch,
    )]
    pub buyer_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = vendor_token_account.owner == vendor.key() @ MarketplaceError::TokenAccountOwnerMismatch,
        constraint = vendor_token_account.mint == buyer_token_account.mint @ MarketplaceError::PaymentMintMismatch,
    )]
    pub vendor_token_account: Account<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = buyer,
        associated_token::mint = mint,
        associated_token::authority = buyer,
    )]
    pub buyer_nft_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn purchase_service(ctx: Context<PurchaseService>) -> Result<()> {
    ctx.accounts.service.ensure_available()?;

    let price = ctx.accounts.service.metadata.price;
    require!(
        ctx.accounts.buyer_token_account.amount >= price,
        MarketplaceError::InsufficientFunds
    );
    require!(
        ctx.accounts.mint.supply == 0,
        MarketplaceError::SupplyInvariantViolated
    );

    let service_key = ctx.accounts.service.key();
    log_compute_checkpoint("purchase:payment", &service_key);

    // Primary sale: full price to the vendor, no royalty
    transfer_payment(
        &ctx.accounts.token_program,
        &ctx.accounts.buyer_token_account,
        &ctx.accounts.vendor_token_account,
        &ctx.accounts.buyer,
        price,
    )?;

    log_compute_checkpoint("purchase:mint", &service_key);

    let bump = [ctx.accounts.service.mint_bump];
    let seeds = &[SERVICE_MINT_SEED, service_key.as_ref(), &bump];
    let signer_seeds = &[&seeds[..]];

    mint_ownership_token(
        &ctx.accounts.token_program,
        &ctx.accounts.mint,
        &ctx.accounts.buyer_nft_account,
        signer_seeds,
    )?;
    revoke_mint_authority(&ctx.accounts.token_program, &ctx.accounts.mint, signer_seeds)?;

    ctx.accounts.mint.reload()?;
    ctx.accounts.buyer_nft_account.reload()?;
    require!(
        ctx.accounts.mint.supply == OWNERSHIP_TOKEN_SUPPLY
            && ctx.accounts.buyer_nft_account.amount == OWNERSHIP_TOKEN_SUPPLY,
        MarketplaceError::SupplyInvariantViolated
    );

    ctx.accounts.service.mark_purchased()?;

    emit!(ServicePurchased {
        buyer: ctx.accounts.buyer.key(),
        vendor: ctx.accounts.vendor.key(),
        service: service_key,
        mint: ctx.accounts.mint.key(),
        price,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Service {} purchased for {}", service_key, price);

    Ok(())
}

#[event]
pub struct ServicePurchased {
    pub buyer: Pubkey,
    pub vendor: Pubkey,
    pub service: Pubkey,
    pub mint: Pubkey,
    pub price: u64,
    pub timestamp: i64,
}

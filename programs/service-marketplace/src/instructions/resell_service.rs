use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};
use crate::constants::*;
use crate::errors::MarketplaceError;
use crate::state::{Marketplace, Service};
use crate::utils::compute::log_compute_checkpoint;
use crate::utils::token::{transfer_ownership_token, transfer_payment};
use crate::utils::validation::{validate_ownership, validate_price};

#[derive(Accounts)]
pub struct ResellService<'info> {
    #[account(mut)]
    pub seller: Signer<'info>,

    #[account(mut)]
    pub buyer: Signer<'info>,

    #[account(
        seeds = [MARKETPLACE_SEED],
        bump = marketplace.bump,
    )]
    pub marketplace: Account<'info, Marketplace>,

    // Soulbound is the only check on this account so it wins over any
    // mismatch further down; the mint binding is checked in the handler.
    #[account(
        mut,
        constraint = !service.metadata.is_soulbound @ MarketplaceError::Soulbound,
    )]
    pub service: Account<'info, Service>,

    pub mint: Account<'info, Mint>,

    #[account(
        mut,
        constraint = seller_nft_account.mint == mint.key() @ MarketplaceError::MintMismatch,
        constraint = seller_nft_account.owner == seller.key() @ MarketplaceError::TokenAccountOwnerMismatch,
    )]
    pub seller_nft_account: Account<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = buyer,
        associated_token::mint = mint,
        associated_token::authority = buyer,
    )]
    pub buyer_nft_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = seller_token_account.owner == seller.key() @ MarketplaceError::TokenAccountOwnerMismatch,
        constraint = seller_token_account.mint != mint.key() @ MarketplaceError::PaymentMintMismatch,
    )]
    pub seller_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = buyer_token_account.owner == buyer.key() @ MarketplaceError::TokenAccountOwnerMismatch,
        constraint = buyer_token_account.mint == seller_token_account.mint @ MarketplaceError::PaymentMintMismatch,
    )]
    pub buyer_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = marketplace_token_account.owner == marketplace.authority @ MarketplaceError::TreasuryMismatch,
        constraint = marketplace_token_account.mint == seller_token_account.mint @ MarketplaceError::PaymentMintMismatch,
    )]
    pub marketplace_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn resell_service(ctx: Context<ResellService>, new_price: u64) -> Result<()> {
    ctx.accounts.service.ensure_resellable()?;
    require_keys_eq!(
        ctx.accounts.service.mint,
        ctx.accounts.mint.key(),
        MarketplaceError::MintMismatch
    );
    require_keys_neq!(
        ctx.accounts.seller.key(),
        ctx.accounts.buyer.key(),
        MarketplaceError::SelfTrade
    );
    validate_ownership(ctx.accounts.seller_nft_account.amount)?;
    validate_price(new_price)?;

    // The buyer pays the current price; new_price becomes the next baseline
    let price = ctx.accounts.service.metadata.price;
    let split = ctx.accounts.marketplace.royalty_split(price)?;
    require!(
        ctx.accounts.buyer_token_account.amount >= price,
        MarketplaceError::InsufficientFunds
    );

    let service_key = ctx.accounts.service.key();
    log_compute_checkpoint("resale:payment", &service_key);

    transfer_payment(
        &ctx.accounts.token_program,
        &ctx.accounts.buyer_token_account,
        &ctx.accounts.seller_token_account,
        &ctx.accounts.buyer,
        split.seller_amount,
    )?;

    transfer_payment(
        &ctx.accounts.token_program,
        &ctx.accounts.buyer_token_account,
        &ctx.accounts.marketplace_token_account,
        &ctx.accounts.buyer,
        split.royalty_amount,
    )?;

    log_compute_checkpoint("resale:ownership", &service_key);

    transfer_ownership_token(
        &ctx.accounts.token_program,
        &ctx.accounts.mint,
        &ctx.accounts.seller_nft_account,
        &ctx.accounts.buyer_nft_account,
        &ctx.accounts.seller,
    )?;

    ctx.accounts.seller_nft_account.reload()?;
    ctx.accounts.buyer_nft_account.reload()?;
    require!(
        ctx.accounts.seller_nft_account.amount == 0
            && ctx.accounts.buyer_nft_account.amount == OWNERSHIP_TOKEN_SUPPLY,
        MarketplaceError::SupplyInvariantViolated
    );

    let paid = ctx.accounts.service.apply_resale(new_price)?;

    emit!(ServiceResold {
        seller: ctx.accounts.seller.key(),
        buyer: ctx.accounts.buyer.key(),
        service: service_key,
        mint: ctx.accounts.mint.key(),
        price: paid,
        seller_amount: split.seller_amount,
        royalty_amount: split.royalty_amount,
        new_price,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!(
        "Service {} resold for {} ({} to seller, {} royalty), next price {}",
        service_key,
        paid,
        split.seller_amount,
        split.royalty_amount,
        new_price
    );

    Ok(())
}

#[event]
pub struct ServiceResold {
    pub seller: Pubkey,
    pub buyer: Pubkey,
    pub service: Pubkey,
    pub mint: Pubkey,
    pub price: u64,
    pub seller_amount: u64,
    pub royalty_amount: u64,
    pub new_price: u64,
    pub timestamp: i64,
}

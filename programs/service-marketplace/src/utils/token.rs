use anchor_lang::prelude::*;
use anchor_spl::token::{
    self,
    spl_token::instruction::AuthorityType,
    Mint, MintTo, SetAuthority, Token, TokenAccount, Transfer, TransferChecked,
};
use crate::constants::{OWNERSHIP_TOKEN_DECIMALS, OWNERSHIP_TOKEN_SUPPLY};

/// Moves payment tokens on behalf of a signing holder. Zero-amount legs are skipped.
pub fn transfer_payment<'info>(
    token_program: &Program<'info, Token>,
    from: &Account<'info, TokenAccount>,
    to: &Account<'info, TokenAccount>,
    authority: &Signer<'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    token::transfer(
        CpiContext::new(
            token_program.to_account_info(),
            Transfer {
                from: from.to_account_info(),
                to: to.to_account_info(),
                authority: authority.to_account_info(),
            },
        ),
        amount,
    )
}

/// Mints the single ownership unit. The mint PDA is its own authority.
pub fn mint_ownership_token<'info>(
    token_program: &Program<'info, Token>,
    mint: &Account<'info, Mint>,
    to: &Account<'info, TokenAccount>,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    token::mint_to(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            MintTo {
                mint: mint.to_account_info(),
                to: to.to_account_info(),
                authority: mint.to_account_info(),
            },
            signer_seeds,
        ),
        OWNERSHIP_TOKEN_SUPPLY,
    )
}

/// Drops the mint authority so supply stays fixed from here on.
pub fn revoke_mint_authority<'info>(
    token_program: &Program<'info, Token>,
    mint: &Account<'info, Mint>,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    token::set_authority(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            SetAuthority {
                current_authority: mint.to_account_info(),
                account_or_mint: mint.to_account_info(),
            },
            signer_seeds,
        ),
        AuthorityType::MintTokens,
        None,
    )
}

pub fn transfer_ownership_token<'info>(
    token_program: &Program<'info, Token>,
    mint: &Account<'info, Mint>,
    from: &Account<'info, TokenAccount>,
    to: &Account<'info, TokenAccount>,
    owner: &Signer<'info>,
) -> Result<()> {
    token::transfer_checked(
        CpiContext::new(
            token_program.to_account_info(),
            TransferChecked {
                from: from.to_account_info(),
                mint: mint.to_account_info(),
                to: to.to_account_info(),
                authority: owner.to_account_info(),
            },
        ),
        OWNERSHIP_TOKEN_SUPPLY,
        OWNERSHIP_TOKEN_DECIMALS,
    )
}

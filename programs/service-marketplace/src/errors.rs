use anchor_lang::prelude::*;

#[error_code]
pub enum MarketplaceError {
    #[msg("Royalty percentage must be between 0 and 100")]
    InvalidRoyalty,

    #[msg("Marketplace is already initialized")]
    AlreadyInitialized,

    #[msg("Price must be greater than zero")]
    InvalidPrice,

    #[msg("Service name too long")]
    NameTooLong,

    #[msg("Service description too long")]
    DescriptionTooLong,

    #[msg("Service is not available")]
    ServiceUnavailable,

    #[msg("Insufficient funds")]
    InsufficientFunds,

    #[msg("Mint does not match the service")]
    MintMismatch,

    #[msg("Vendor does not match the service")]
    VendorMismatch,

    #[msg("Payment accounts must share one payment mint")]
    PaymentMintMismatch,

    #[msg("Token account owner mismatch")]
    TokenAccountOwnerMismatch,

    #[msg("Seller does not hold the ownership token")]
    NotOwner,

    #[msg("Soulbound service cannot be resold")]
    Soulbound,

    #[msg("Royalty split overflow")]
    RoyaltySplitOverflow,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Ownership token supply invariant violated")]
    SupplyInvariantViolated,

    #[msg("Treasury account is not owned by the marketplace authority")]
    TreasuryMismatch,

    #[msg("Seller and buyer must differ")]
    SelfTrade,
}

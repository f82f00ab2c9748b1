// Seeds
pub const MARKETPLACE_SEED: &[u8] = b"marketplace";
pub const SERVICE_MINT_SEED: &[u8] = b"service_mint";

// Royalty configuration
pub const MAX_ROYALTY_PERCENTAGE: u8 = 100;
pub const PERCENTAGE_DENOMINATOR: u128 = 100;

// Ownership token: one indivisible unit per service
pub const OWNERSHIP_TOKEN_DECIMALS: u8 = 0;
pub const OWNERSHIP_TOKEN_SUPPLY: u64 = 1;

// Metadata limits (bytes)
pub const MAX_NAME_LEN: usize = 64;
pub const MAX_DESCRIPTION_LEN: usize = 256;

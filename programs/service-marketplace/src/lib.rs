#![allow(unexpected_cfgs)]
#![allow(deprecated)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use state::ServiceMetadata;

declare_id!("BxRHkqPFi17qnGMM9EHiMjGoJFC36mBtGrPhZ6Tt6x1m");

#[program]
pub mod service_marketplace {
    use super::*;

    pub fn initialize_marketplace(
        ctx: Context<InitializeMarketplace>,
        royalty_percentage: u8,
    ) -> Result<()> {
        instructions::initialize_marketplace::initialize_marketplace(ctx, royalty_percentage)
    }

    pub fn list_service(ctx: Context<ListService>, metadata: ServiceMetadata) -> Result<()> {
        instructions::list_service::list_service(ctx, metadata)
    }

    pub fn purchase_service(ctx: Context<PurchaseService>) -> Result<()> {
        instructions::purchase_service::purchase_service(ctx)
    }

    pub fn resell_service(ctx: Context<ResellService>, new_price: u64) -> Result<()> {
        instructions::resell_service::resell_service(ctx, new_price)
    }
}

use anchor_lang::prelude::*;
use anchor_lang::solana_program::log::sol_log_compute_units;

pub fn log_compute_checkpoint(stage: &str, service: &Pubkey) {
    msg!("Compute checkpoint: {} for service {}", stage, service);
    sol_log_compute_units();
}

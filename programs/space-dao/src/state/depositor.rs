use anchor_lang::prelude::*;

// Deposit units held by one depositor in one space
// Units convert to tokens pro-rata against the live treasury balance
#[account]
#[derive(InitSpace)]
pub struct Depositor {
    pub space: Pubkey,
    pub depositor: Pubkey,
    pub total_deposited: u64,
    pub bump: u8,
}

use anchor_lang::prelude::*;

use crate::state::SelectionMode;

#[event]
pub struct SpaceCreated {
    pub space: Pubkey,
    pub vault_authority: Pubkey,
    pub token_mint: Pubkey,
}

#[event]
pub struct Deposited {
    pub space: Pubkey,
    pub depositor: Pubkey,
    pub amount: u64,
    pub total_deposits: u64,
}

#[event]
pub struct ShareWithdrawalProposed {
    pub space: Pubkey,
    pub withdrawal_id: u64,
    pub proposer: Pubkey,
    pub amount: u64,
    pub approvals: u8,
}

#[event]
pub struct ShareWithdrawalApproved {
    pub space: Pubkey,
    pub withdrawal_id: u64,
    pub approver: Pubkey,
}

#[event]
pub struct ShareWithdrawalExecuted {
    pub space: Pubkey,
    pub withdrawal_id: u64,
    pub recipient: Pubkey,
    pub amount: u64,
    pub units_burned: u64,
}

#[event]
pub struct WithdrawalDistributed {
    pub space: Pubkey,
    pub recipient_count: u32,
    pub amount_each: u64,
}

#[event]
pub struct TokensDistributed {
    pub space: Pubkey,
    pub token: Pubkey,
    pub recipient_count: u32,
    pub value: u64,
}

#[event]
pub struct WithdrawalAmountUpdated {
    pub space: Pubkey,
    pub amount: u64,
}

#[event]
pub struct IncentiveConfigUpdated {
    pub space: Pubkey,
    pub mode: SelectionMode,
    pub num_of_targets: u32,
    pub ranking_bps: u16,
}

#[event]
pub struct IncentiveRecipientsSelected {
    pub space: Pubkey,
    pub round: u64,
    pub recipients: Vec<Pubkey>,
}

#[event]
pub struct IncentiveClaimed {
    pub space: Pubkey,
    pub claimant: Pubkey,
    pub token: Pubkey,
    pub amount: u64,
    pub round: u64,
}

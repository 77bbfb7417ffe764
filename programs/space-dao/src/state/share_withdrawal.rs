use anchor_lang::prelude::*;
use crate::constants::*;

// Request by a depositor to withdraw part of their share
// Same Created -> Executed state machine as a batch proposal: one
// approval per admin (bitmap over admin index), executed at majority
#[account]
#[derive(InitSpace)]
pub struct ShareWithdrawal {
    pub space: Pubkey,
    pub withdrawal_id: u64,

    // Depositor asking for the withdrawal, also the payout recipient
    pub proposer: Pubkey,

    pub amount: u64,

    // Bit i set = admins[i] approved
    pub approval_bitmap: u64,
    pub approval_count: u8,

    pub executed: bool,
    pub created_at: i64,
    pub executed_at: i64,

    pub bump: u8,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShareWithdrawalInfo {
    pub proposer: Pubkey,
    pub amount: u64,
    pub approvals: u8,
    pub executed: bool,
}

impl ShareWithdrawal {
    pub fn has_approved(&self, admin_index: usize) -> bool {
        admin_index < MAX_ADMINS && self.approval_bitmap & (1u64 << admin_index) != 0
    }

    // Returns false if the admin already approved
    pub fn approve(&mut self, admin_index: usize) -> bool {
        if admin_index >= MAX_ADMINS || self.has_approved(admin_index) {
            return false;
        }
        self.approval_bitmap |= 1u64 << admin_index;
        self.approval_count += 1;
        true
    }

    pub fn is_ready_to_execute(&self, required_approvals: u8) -> bool {
        !self.executed && self.approval_count >= required_approvals
    }

    pub fn info(&self) -> ShareWithdrawalInfo {
        ShareWithdrawalInfo {
            proposer: self.proposer,
            amount: self.amount,
            approvals: self.approval_count,
            executed: self.executed,
        }
    }
}

use anchor_lang::prelude::*;
use crate::constants::{MAX_ADMINS, MAX_BATCH_TRANSFERS};

// One leg of a batch transfer
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct TransferPair {
    pub recipient: Pubkey,
    pub amount: u64,
}

// Batch transfer proposal
// Append-only: proposals are never closed so ids stay auditable
#[account]
#[derive(InitSpace)]
pub struct Proposal {
    // The DAO this proposal belongs to
    pub dao: Pubkey,

    // Zero-based id taken from TeamDao::proposal_count
    pub proposal_id: u64,

    // Admin who created the proposal (approves implicitly)
    pub proposer: Pubkey,

    // Mint of the token to move
    pub token: Pubkey,

    // Transfers executed in this exact order
    #[max_len(MAX_BATCH_TRANSFERS)]
    pub transfers: Vec<TransferPair>,

    // Bit i set when admins[i] has approved
    pub approval_bitmap: u64,

    pub approval_count: u8,

    pub executed: bool,

    pub created_at: i64,

    // 0 until executed
    pub executed_at: i64,

    pub bump: u8,
}

// Read model returned by get_proposal_info
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProposalInfo {
    pub token: Pubkey,
    pub transfer_count: u32,
    pub approvals: u8,
    pub executed: bool,
}

impl Proposal {
    pub fn has_approved(&self, admin_index: usize) -> bool {
        if admin_index >= MAX_ADMINS {
            return false;
        }
        (self.approval_bitmap & (1u64 << admin_index)) != 0
    }

    // Record an approval, returns false if it was already recorded
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

    // Sum of all transfer amounts, None on overflow
    pub fn total_amount(&self) -> Option<u64> {
        self.transfers
            .iter()
            .try_fold(0u64, |acc, pair| acc.checked_add(pair.amount))
    }

    pub fn info(&self) -> ProposalInfo {
        ProposalInfo {
            token: self.token,
            transfer_count: self.transfers.len() as u32,
            approvals: self.approval_count,
            executed: self.executed,
        }
    }
}

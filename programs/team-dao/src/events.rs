use anchor_lang::prelude::*;

#[event]
pub struct TeamDaoCreated {
    pub dao: Pubkey,
    pub creator: Pubkey,
    pub admin_count: u8,
    pub required_approvals: u8,
}

#[event]
pub struct ProposalCreated {
    pub proposal_id: u64,
    pub proposer: Pubkey,
    pub approvals: u8,
}

#[event]
pub struct Approved {
    pub proposal_id: u64,
    pub approver: Pubkey,
}

#[event]
pub struct BatchExecuted {
    pub proposal_id: u64,
}

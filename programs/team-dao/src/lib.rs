// Team DAO Program
//
// Multi-admin treasury: any admin proposes a batch of SPL token transfers,
// the other admins approve, and the approval that reaches a strict majority
// (floor(n / 2) + 1) executes every transfer atomically.
//
// Instructions:
// - create_team_dao: fixed admin set (3..=10), vault PDA
// - propose_batch: 1..=100 (recipient, amount) pairs for one mint
// - approve_and_execute: one approval per admin, executes at threshold
// - get_*/is_*: read-only views returned through return data

use anchor_lang::prelude::*;
pub mod constants;
pub mod errors;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod state;

pub use errors::*;
pub use events::*;
pub use instructions::*;
pub use state::*;

declare_id!("EGudSdMvUHsGeKEKz4ozJbQgUaLGM2mX4bApatqQsdwK");

#[program]
pub mod team_dao {
    use super::*;

    // Create a DAO with an immutable admin set
    // Threshold is derived from the admin count, not configured
    pub fn create_team_dao(
        ctx: Context<CreateTeamDao>,
        dao_id: u64,
        admins: Vec<Pubkey>,
    ) -> Result<()> {
        ctx.accounts.create_team_dao(dao_id, admins, &ctx.bumps)
    }

    // Propose a batch transfer, proposer approves implicitly
    // Batch size is bounded by 100 and, in practice, by transaction size
    // Returns the new proposal id
    pub fn propose_batch(
        ctx: Context<ProposeBatch>,
        token: Pubkey,
        transfers: Vec<TransferPair>,
    ) -> Result<u64> {
        ctx.accounts.propose_batch(token, transfers, &ctx.bumps)
    }

    // Approve a proposal, executing it when the majority is reached
    // Remaining accounts: recipient token accounts in transfer order
    pub fn approve_and_execute<'info>(
        ctx: Context<'_, '_, 'info, 'info, ApproveAndExecute<'info>>,
        _proposal_id: u64,
    ) -> Result<()> {
        ctx.accounts.approve_and_execute(ctx.remaining_accounts)
    }

    pub fn get_proposal_info(ctx: Context<ReadProposal>, _proposal_id: u64) -> Result<ProposalInfo> {
        Ok(ctx.accounts.proposal_info())
    }

    pub fn get_required_approvals(ctx: Context<ReadTeamDao>) -> Result<u8> {
        Ok(ctx.accounts.team_dao.required_approvals())
    }

    pub fn is_admin(ctx: Context<ReadTeamDao>, identity: Pubkey) -> Result<bool> {
        Ok(ctx.accounts.team_dao.is_admin(&identity))
    }

    pub fn is_dao_active(ctx: Context<ReadTeamDao>) -> Result<bool> {
        Ok(ctx.accounts.team_dao.is_dao_active())
    }

    pub fn get_admins(ctx: Context<ReadTeamDao>) -> Result<Vec<Pubkey>> {
        Ok(ctx.accounts.team_dao.admins.clone())
    }
}

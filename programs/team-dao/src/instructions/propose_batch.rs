use anchor_lang::prelude::*;
use crate::{state::*, errors::*, events::*, constants::*};

// Propose Batch Instruction
//
// Creates a pending batch transfer of one token to many recipients.
// The proposer's approval is recorded immediately (approval_count = 1).
// Proposing never executes, even when one approval would already be a
// majority; execution only happens inside approve_and_execute.
//
// Validation order is fixed:
// DaoInactive -> NotAdmin -> ZeroTokenAddress -> InvalidBatchSize ->
// InvalidRecipient / InvalidAmount (per transfer, in list order)
//
// MAX_BATCH_TRANSFERS bounds the stored batch. The practical bound is the
// 1232-byte transaction: each TransferPair is 40 bytes of instruction data
// and approve_and_execute needs one recipient account per transfer, so
// roughly 20-25 transfers fit in one executable batch.

#[derive(Accounts)]
pub struct ProposeBatch<'info> {
    #[account(mut)]
    pub proposer: Signer<'info>,

    #[account(
        mut,
        seeds = [
            TEAM_DAO,
            team_dao.creator.as_ref(),
            &team_dao.dao_id.to_le_bytes(),
        ],
        bump = team_dao.bump,
    )]
    pub team_dao: Account<'info, TeamDao>,

    // Seeds: ["proposal", team_dao, proposal_count]
    #[account(
        init,
        payer = proposer,
        space = ANCHOR_DISCRIMINATOR + Proposal::INIT_SPACE,
        seeds = [
            PROPOSAL,
            team_dao.key().as_ref(),
            &team_dao.proposal_count.to_le_bytes(),
        ],
        bump,
    )]
    pub proposal: Account<'info, Proposal>,

    pub system_program: Program<'info, System>,
}

impl<'info> ProposeBatch<'info> {
    pub fn propose_batch(
        &mut self,
        token: Pubkey,
        transfers: Vec<TransferPair>,
        bumps: &ProposeBatchBumps,
    ) -> Result<u64> {
        require!(self.team_dao.is_dao_active(), TeamDaoError::DaoInactive);

        let proposer = self.proposer.key();
        let proposer_index = self
            .team_dao
            .admin_index(&proposer)
            .ok_or(TeamDaoError::NotAdmin)?;

        require!(token != Pubkey::default(), TeamDaoError::ZeroTokenAddress);

        require!(
            !transfers.is_empty() && transfers.len() <= MAX_BATCH_TRANSFERS,
            TeamDaoError::InvalidBatchSize
        );

        for pair in transfers.iter() {
            require!(
                pair.recipient != Pubkey::default(),
                TeamDaoError::InvalidRecipient
            );
            require!(pair.amount > 0, TeamDaoError::InvalidAmount);
        }

        let proposal_id = self.team_dao.proposal_count;
        self.team_dao.proposal_count = proposal_id
            .checked_add(1)
            .ok_or(TeamDaoError::MathOverflow)?;

        let transfer_count = transfers.len();

        self.proposal.set_inner(Proposal {
            dao: self.team_dao.key(),
            proposal_id,
            proposer,
            token,
            transfers,
            approval_bitmap: 1u64 << proposer_index,
            approval_count: 1,
            executed: false,
            created_at: Clock::get()?.unix_timestamp,
            executed_at: 0,
            bump: bumps.proposal,
        });

        msg!(
            "Proposal {} created by {}: token={}, transfers={}",
            proposal_id,
            proposer,
            token,
            transfer_count
        );

        emit!(ProposalCreated {
            proposal_id,
            proposer,
            approvals: 1,
        });

        Ok(proposal_id)
    }
}

use anchor_lang::prelude::*;
use crate::{state::*, errors::*, constants::*};

// Read-only instructions
// Values are returned through Anchor return data; nothing is mutated.

#[derive(Accounts)]
pub struct ReadTeamDao<'info> {
    #[account(
        seeds = [
            TEAM_DAO,
            team_dao.creator.as_ref(),
            &team_dao.dao_id.to_le_bytes(),
        ],
        bump = team_dao.bump,
    )]
    pub team_dao: Account<'info, TeamDao>,
}

#[derive(Accounts)]
#[instruction(proposal_id: u64)]
pub struct ReadProposal<'info> {
    #[account(
        seeds = [
            TEAM_DAO,
            team_dao.creator.as_ref(),
            &team_dao.dao_id.to_le_bytes(),
        ],
        bump = team_dao.bump,
    )]
    pub team_dao: Account<'info, TeamDao>,

    #[account(
        seeds = [
            PROPOSAL,
            team_dao.key().as_ref(),
            &proposal_id.to_le_bytes(),
        ],
        bump = proposal.bump,
        constraint = proposal.dao == team_dao.key() @ TeamDaoError::InvalidProposal,
    )]
    pub proposal: Account<'info, Proposal>,
}

impl<'info> ReadProposal<'info> {
    pub fn proposal_info(&self) -> ProposalInfo {
        self.proposal.info()
    }
}

use anchor_lang::prelude::*;
use crate::{state::*, events::*, constants::*};

// Create Team DAO Instruction
//
// Initializes a DAO with a fixed admin set (3..=10 distinct admins).
// The creator only pays for the account, it does not become an admin
// unless listed. The vault PDA is derived here and its bump stored so
// later executions can sign treasury transfers.

#[derive(Accounts)]
#[instruction(dao_id: u64)]
pub struct CreateTeamDao<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    // Seeds: ["team_dao", creator, dao_id]
    #[account(
        init,
        payer = creator,
        space = ANCHOR_DISCRIMINATOR + TeamDao::INIT_SPACE,
        seeds = [
            TEAM_DAO,
            creator.key().as_ref(),
            &dao_id.to_le_bytes(),
        ],
        bump,
    )]
    pub team_dao: Account<'info, TeamDao>,

    // Seeds: ["vault", team_dao]
    /// CHECK: PDA used only as the signing authority of treasury token accounts
    #[account(
        seeds = [VAULT, team_dao.key().as_ref()],
        bump,
    )]
    pub vault_authority: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> CreateTeamDao<'info> {
    pub fn create_team_dao(
        &mut self,
        dao_id: u64,
        admins: Vec<Pubkey>,
        bumps: &CreateTeamDaoBumps,
    ) -> Result<()> {
        validate_admins(&admins)?;

        let admin_count = admins.len() as u8;

        self.team_dao.set_inner(TeamDao {
            dao_id,
            creator: self.creator.key(),
            admins,
            active: true,
            proposal_count: 0,
            bump: bumps.team_dao,
            vault_bump: bumps.vault_authority,
        });

        let required_approvals = self.team_dao.required_approvals();

        msg!(
            "Team DAO {} created: admins={}, required_approvals={}",
            dao_id,
            admin_count,
            required_approvals
        );

        emit!(TeamDaoCreated {
            dao: self.team_dao.key(),
            creator: self.creator.key(),
            admin_count,
            required_approvals,
        });

        Ok(())
    }
}

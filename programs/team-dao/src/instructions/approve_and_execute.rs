use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};
use crate::{state::*, errors::*, events::*, constants::*, helpers::*};

// Approve And Execute Instruction
//
// Records one admin approval (tracked via bitmap, once per admin).
// The approval that reaches the majority threshold executes the batch in
// the same instruction:
// 1. Treasury must hold the sum of all amounts (InsufficientBalance)
// 2. Recipient token accounts, passed as remaining accounts in transfer
//    order, must match the proposal mint and recipients
// 3. executed is set before any token CPI
// 4. Transfers run strictly in list order, signed by the vault PDA
//
// Any failure reverts the whole instruction, approval included.

#[derive(Accounts)]
#[instruction(proposal_id: u64)]
pub struct ApproveAndExecute<'info> {
    pub approver: Signer<'info>,

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
        mut,
        seeds = [
            PROPOSAL,
            team_dao.key().as_ref(),
            &proposal_id.to_le_bytes(),
        ],
        bump = proposal.bump,
        constraint = proposal.dao == team_dao.key() @ TeamDaoError::InvalidProposal,
    )]
    pub proposal: Box<Account<'info, Proposal>>,

    /// CHECK: PDA signing authority of the treasury token accounts
    #[account(
        seeds = [VAULT, team_dao.key().as_ref()],
        bump = team_dao.vault_bump,
    )]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(
        address = proposal.token @ TeamDaoError::InvalidTokenMint
    )]
    pub token_mint: Box<Account<'info, Mint>>,

    // Treasury ATA for the proposal token
    #[account(
        mut,
        associated_token::mint = token_mint,
        associated_token::authority = vault_authority,
    )]
    pub vault_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

impl<'info> ApproveAndExecute<'info> {
    pub fn approve_and_execute(
        &mut self,
        recipient_accounts: &'info [AccountInfo<'info>],
    ) -> Result<()> {
        let approver = self.approver.key();
        let proposal_id = self.proposal.proposal_id;

        let admin_index = self
            .team_dao
            .admin_index(&approver)
            .ok_or(TeamDaoError::NotAdmin)?;

        require!(!self.proposal.executed, TeamDaoError::AlreadyExecuted);

        require!(
            self.proposal.approve(admin_index),
            TeamDaoError::AlreadyApproved
        );

        // approval_count can never exceed the admin set
        require!(
            self.proposal.approval_count as usize <= self.team_dao.admins.len(),
            TeamDaoError::MathOverflow
        );

        emit!(Approved {
            proposal_id,
            approver,
        });

        let required = self.team_dao.required_approvals();
        if !self.proposal.is_ready_to_execute(required) {
            msg!(
                "Proposal {} approved by {}: {}/{}",
                proposal_id,
                approver,
                self.proposal.approval_count,
                required
            );
            return Ok(());
        }

        self.execute_batch(recipient_accounts)
    }

    fn execute_batch(&mut self, recipient_accounts: &'info [AccountInfo<'info>]) -> Result<()> {
        let proposal_id = self.proposal.proposal_id;
        let transfers = self.proposal.transfers.clone();

        let total = self
            .proposal
            .total_amount()
            .ok_or(TeamDaoError::MathOverflow)?;
        require!(
            self.vault_token_account.amount >= total,
            TeamDaoError::InsufficientBalance
        );

        require!(
            recipient_accounts.len() == transfers.len(),
            TeamDaoError::RecipientAccountMismatch
        );
        for (pair, info) in transfers.iter().zip(recipient_accounts.iter()) {
            load_recipient_token_account(info, &self.proposal.token, &pair.recipient)?;
        }

        // Effects before interactions
        self.proposal.executed = true;
        self.proposal.executed_at = Clock::get()?.unix_timestamp;

        let dao_key = self.team_dao.key();
        let vault_seeds = &[
            VAULT,
            dao_key.as_ref(),
            &[self.team_dao.vault_bump],
        ];
        let signer_seeds = &[&vault_seeds[..]];

        for (pair, info) in transfers.iter().zip(recipient_accounts.iter()) {
            let cpi_context = CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                Transfer {
                    from: self.vault_token_account.to_account_info(),
                    to: info.clone(),
                    authority: self.vault_authority.to_account_info(),
                },
                signer_seeds,
            );
            token::transfer(cpi_context, pair.amount)?;
        }

        msg!(
            "Proposal {} executed: {} transfers, total={}",
            proposal_id,
            transfers.len(),
            total
        );

        emit!(BatchExecuted { proposal_id });

        Ok(())
    }
}

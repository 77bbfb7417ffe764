use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::{state::*, errors::*, events::*, constants::*, helpers::*};

// Approve Share Withdrawal Instruction
//
// Records one admin approval. The approval that reaches the majority
// executes the withdrawal:
// 1. amount <= proposer's available share at this moment (InsufficientShare)
// 2. executed is set and the burned deposit units are removed
// 3. tokens move from the treasury to the proposer's ATA
//
// A withdrawal already at the threshold but not executed (an admin
// proposer in a single-admin space) is executed by its next approval
// call instead of failing with AlreadyApproved.

#[derive(Accounts)]
#[instruction(withdrawal_id: u64)]
pub struct ApproveShareWithdrawal<'info> {
    pub approver: Signer<'info>,

    #[account(
        mut,
        seeds = [
            SPACE,
            space_account.creator.as_ref(),
            &space_account.space_id.to_le_bytes(),
        ],
        bump = space_account.bump,
    )]
    pub space_account: Box<Account<'info, SpaceState>>,

    #[account(
        mut,
        seeds = [
            SHARE_WITHDRAWAL,
            space_account.key().as_ref(),
            &withdrawal_id.to_le_bytes(),
        ],
        bump = share_withdrawal.bump,
        constraint = share_withdrawal.space == space_account.key() @ SpaceDaoError::InvalidProposal,
    )]
    pub share_withdrawal: Box<Account<'info, ShareWithdrawal>>,

    #[account(
        mut,
        seeds = [
            DEPOSITOR,
            space_account.key().as_ref(),
            share_withdrawal.proposer.as_ref(),
        ],
        bump = depositor_record.bump,
    )]
    pub depositor_record: Box<Account<'info, Depositor>>,

    /// CHECK: PDA signing authority of the treasury token accounts
    #[account(
        seeds = [TREASURYAUTH, space_account.key().as_ref()],
        bump = space_account.treasury_bump,
    )]
    pub treasury_authority: UncheckedAccount<'info>,

    #[account(
        address = space_account.token_mint @ SpaceDaoError::InvalidTokenMint
    )]
    pub token_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        associated_token::mint = token_mint,
        associated_token::authority = treasury_authority,
    )]
    pub treasury_token_account: Box<Account<'info, TokenAccount>>,

    // Payout destination: the proposer's ATA
    #[account(
        mut,
        associated_token::mint = token_mint,
        associated_token::authority = share_withdrawal.proposer,
    )]
    pub proposer_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

impl<'info> ApproveShareWithdrawal<'info> {
    pub fn approve_share_withdrawal(&mut self) -> Result<()> {
        let approver = self.approver.key();
        let space_key = self.space_account.key();
        let withdrawal_id = self.share_withdrawal.withdrawal_id;
        let required = self.space_account.required_approvals();

        let admin_index = self.space_account.require_admin(&approver)?;

        require!(!self.share_withdrawal.executed, SpaceDaoError::AlreadyExecuted);

        if self.share_withdrawal.approve(admin_index) {
            require!(
                self.share_withdrawal.approval_count as usize <= self.space_account.admins.len(),
                SpaceDaoError::MathOverflow
            );

            emit!(ShareWithdrawalApproved {
                space: space_key,
                withdrawal_id,
                approver,
            });
        } else {
            require!(
                self.share_withdrawal.is_ready_to_execute(required),
                SpaceDaoError::AlreadyApproved
            );
        }

        if !self.share_withdrawal.is_ready_to_execute(required) {
            msg!(
                "Share withdrawal {} approved by {}: {}/{}",
                withdrawal_id,
                approver,
                self.share_withdrawal.approval_count,
                required
            );
            return Ok(());
        }

        self.execute_withdrawal()
    }

    fn execute_withdrawal(&mut self) -> Result<()> {
        let amount = self.share_withdrawal.amount;
        let balance = self.treasury_token_account.amount;
        let deposited = self.depositor_record.total_deposited;
        let total_deposits = self.space_account.total_deposits;

        let share = available_share(deposited, total_deposits, balance)?;
        require!(amount <= share, SpaceDaoError::InsufficientShare);

        let burned = units_to_burn(amount, deposited, total_deposits, balance)?;

        // Effects before interactions
        self.share_withdrawal.executed = true;
        self.share_withdrawal.executed_at = Clock::get()?.unix_timestamp;
        self.depositor_record.total_deposited = deposited
            .checked_sub(burned)
            .ok_or(SpaceDaoError::MathOverflow)?;
        self.space_account.total_deposits = total_deposits
            .checked_sub(burned)
            .ok_or(SpaceDaoError::MathOverflow)?;

        let space_key = self.space_account.key();
        transfer_from_treasury(
            &self.token_program,
            self.treasury_token_account.to_account_info(),
            self.proposer_token_account.to_account_info(),
            self.treasury_authority.to_account_info(),
            &space_key,
            self.space_account.treasury_bump,
            amount,
        )?;

        msg!(
            "Share withdrawal {} executed: recipient={}, amount={}, units_burned={}",
            self.share_withdrawal.withdrawal_id,
            self.share_withdrawal.proposer,
            amount,
            burned
        );

        emit!(ShareWithdrawalExecuted {
            space: space_key,
            withdrawal_id: self.share_withdrawal.withdrawal_id,
            recipient: self.share_withdrawal.proposer,
            amount,
            units_burned: burned,
        });

        Ok(())
    }
}

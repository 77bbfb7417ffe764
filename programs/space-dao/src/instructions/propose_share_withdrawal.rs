use anchor_lang::prelude::*;
use crate::{state::*, errors::*, events::*, constants::*};

// Propose Share Withdrawal Instruction
//
// A depositor asks to withdraw `amount` of the space token. The amount is
// not checked against the depositor's share here: the share moves with the
// balance, so it is checked when the withdrawal executes.
// An admin proposer's approval is recorded immediately. Proposing never
// executes.

#[derive(Accounts)]
pub struct ProposeShareWithdrawal<'info> {
    #[account(mut)]
    pub proposer: Signer<'info>,

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

    // Seeds: ["depositor", space, proposer]
    /// CHECK: may not exist; checked in the handler so non-depositors get NotDepositor
    #[account(
        seeds = [
            DEPOSITOR,
            space_account.key().as_ref(),
            proposer.key().as_ref(),
        ],
        bump,
    )]
    pub depositor_record: UncheckedAccount<'info>,

    // Seeds: ["share_withdrawal", space, share_withdrawal_count]
    #[account(
        init,
        payer = proposer,
        space = ANCHOR_DISCRIMINATOR + ShareWithdrawal::INIT_SPACE,
        seeds = [
            SHARE_WITHDRAWAL,
            space_account.key().as_ref(),
            &space_account.share_withdrawal_count.to_le_bytes(),
        ],
        bump,
    )]
    pub share_withdrawal: Account<'info, ShareWithdrawal>,

    pub system_program: Program<'info, System>,
}

impl<'info> ProposeShareWithdrawal<'info> {
    pub fn propose_share_withdrawal(
        &mut self,
        amount: u64,
        bumps: &ProposeShareWithdrawalBumps,
    ) -> Result<u64> {
        require!(self.space_account.is_dao_active(), SpaceDaoError::DaoInactive);

        let proposer = self.proposer.key();
        require!(
            self.depositor_record.owner == &crate::ID && !self.depositor_record.data_is_empty(),
            SpaceDaoError::NotDepositor
        );

        require!(amount > 0, SpaceDaoError::InvalidAmount);

        let space_key = self.space_account.key();
        let withdrawal_id = self.space_account.share_withdrawal_count;
        self.space_account.share_withdrawal_count = withdrawal_id
            .checked_add(1)
            .ok_or(SpaceDaoError::MathOverflow)?;

        let (approval_bitmap, approval_count) = match self.space_account.admin_index(&proposer) {
            Some(index) => (1u64 << index, 1u8),
            None => (0, 0),
        };

        self.share_withdrawal.set_inner(ShareWithdrawal {
            space: space_key,
            withdrawal_id,
            proposer,
            amount,
            approval_bitmap,
            approval_count,
            executed: false,
            created_at: Clock::get()?.unix_timestamp,
            executed_at: 0,
            bump: bumps.share_withdrawal,
        });

        msg!(
            "Share withdrawal {} proposed by {}: amount={}, approvals={}",
            withdrawal_id,
            proposer,
            amount,
            approval_count
        );

        emit!(ShareWithdrawalProposed {
            space: space_key,
            withdrawal_id,
            proposer,
            amount,
            approvals: approval_count,
        });

        Ok(withdrawal_id)
    }
}

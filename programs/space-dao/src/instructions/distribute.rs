use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::{state::*, errors::*, events::*, constants::*, helpers::*};

// Bulk Distribution Instructions
//
// distribute_withdrawal: pays the configured withdrawal_amount of the
// space token to every recipient.
// distribute: pays `value` of any mint held by the treasury to every
// recipient.
//
// Admin only. Recipient token accounts are passed as remaining accounts in
// recipient order. The treasury must cover the whole batch up front; there
// is no partial payout.

#[derive(Accounts)]
pub struct DistributeWithdrawal<'info> {
    pub admin: Signer<'info>,

    #[account(
        seeds = [
            SPACE,
            space_account.creator.as_ref(),
            &space_account.space_id.to_le_bytes(),
        ],
        bump = space_account.bump,
    )]
    pub space_account: Box<Account<'info, SpaceState>>,

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

    pub token_program: Program<'info, Token>,
}

impl<'info> DistributeWithdrawal<'info> {
    pub fn distribute_withdrawal(
        &mut self,
        recipients: Vec<Pubkey>,
        recipient_accounts: &'info [AccountInfo<'info>],
    ) -> Result<()> {
        self.space_account.require_admin(&self.admin.key())?;

        let amount_each = self.space_account.withdrawal_amount;
        require!(amount_each > 0, SpaceDaoError::InvalidWithdrawalAmount);

        let total = validate_distribution(
            &recipients,
            recipient_accounts,
            &self.space_account.token_mint,
            amount_each,
            self.treasury_token_account.amount,
        )?;

        let space_key = self.space_account.key();
        for info in recipient_accounts.iter() {
            transfer_from_treasury(
                &self.token_program,
                self.treasury_token_account.to_account_info(),
                info.clone(),
                self.treasury_authority.to_account_info(),
                &space_key,
                self.space_account.treasury_bump,
                amount_each,
            )?;
        }

        msg!(
            "Withdrawal distributed from space {}: recipients={}, amount_each={}, total={}",
            self.space_account.space_id,
            recipients.len(),
            amount_each,
            total
        );

        emit!(WithdrawalDistributed {
            space: space_key,
            recipient_count: recipients.len() as u32,
            amount_each,
        });

        Ok(())
    }
}

#[derive(Accounts)]
pub struct Distribute<'info> {
    pub admin: Signer<'info>,

    #[account(
        seeds = [
            SPACE,
            space_account.creator.as_ref(),
            &space_account.space_id.to_le_bytes(),
        ],
        bump = space_account.bump,
    )]
    pub space_account: Box<Account<'info, SpaceState>>,

    /// CHECK: PDA signing authority of the treasury token accounts
    #[account(
        seeds = [TREASURYAUTH, space_account.key().as_ref()],
        bump = space_account.treasury_bump,
    )]
    pub treasury_authority: UncheckedAccount<'info>,

    // Treasury ATA of `token`, checked in the handler so a zero mint is
    // reported as ZeroTokenAddress
    /// CHECK: validated against the ATA of treasury_authority for `token`
    #[account(mut)]
    pub treasury_token_account: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
}

impl<'info> Distribute<'info> {
    pub fn distribute(
        &mut self,
        token: Pubkey,
        recipients: Vec<Pubkey>,
        value: u64,
        recipient_accounts: &'info [AccountInfo<'info>],
    ) -> Result<()> {
        self.space_account.require_admin(&self.admin.key())?;

        require!(token != Pubkey::default(), SpaceDaoError::ZeroTokenAddress);
        require!(value > 0, SpaceDaoError::InvalidAmount);

        let balance = treasury_balance(
            &self.treasury_token_account,
            &self.treasury_authority.key(),
            &token,
        )?;

        let total = validate_distribution(
            &recipients,
            recipient_accounts,
            &token,
            value,
            balance,
        )?;

        let space_key = self.space_account.key();
        for info in recipient_accounts.iter() {
            transfer_from_treasury(
                &self.token_program,
                self.treasury_token_account.to_account_info(),
                info.clone(),
                self.treasury_authority.to_account_info(),
                &space_key,
                self.space_account.treasury_bump,
                value,
            )?;
        }

        msg!(
            "Tokens distributed from space {}: token={}, recipients={}, value={}, total={}",
            self.space_account.space_id,
            token,
            recipients.len(),
            value,
            total
        );

        emit!(TokensDistributed {
            space: space_key,
            token,
            recipient_count: recipients.len() as u32,
            value,
        });

        Ok(())
    }
}

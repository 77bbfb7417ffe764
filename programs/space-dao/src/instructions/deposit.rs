use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};
use crate::{state::*, errors::*, events::*, constants::*};

// Deposit Instruction
//
// Moves `amount` of the space token from the caller into the treasury and
// credits the same number of deposit units. The depositor record is
// created on first deposit, which also bumps depositor_count.

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut)]
    pub depositor: Signer<'info>,

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

    // Seeds: ["depositor", space, depositor]
    #[account(
        init_if_needed,
        payer = depositor,
        space = ANCHOR_DISCRIMINATOR + Depositor::INIT_SPACE,
        seeds = [
            DEPOSITOR,
            space_account.key().as_ref(),
            depositor.key().as_ref(),
        ],
        bump,
    )]
    pub depositor_record: Account<'info, Depositor>,

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

    // Source of the deposit
    #[account(
        mut,
        associated_token::mint = token_mint,
        associated_token::authority = depositor,
    )]
    pub depositor_token_account: Box<Account<'info, TokenAccount>>,

    // Destination
    #[account(
        mut,
        associated_token::mint = token_mint,
        associated_token::authority = treasury_authority,
    )]
    pub treasury_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> Deposit<'info> {
    pub fn deposit(&mut self, amount: u64, bumps: &DepositBumps) -> Result<()> {
        require!(amount > 0, SpaceDaoError::InvalidAmount);
        require!(
            self.depositor_token_account.amount >= amount,
            SpaceDaoError::InsufficientBalance
        );

        let depositor = self.depositor.key();
        let space_key = self.space_account.key();

        // Fresh record from init_if_needed
        if self.depositor_record.depositor == Pubkey::default() {
            self.depositor_record.set_inner(Depositor {
                space: space_key,
                depositor,
                total_deposited: 0,
                bump: bumps.depositor_record,
            });
            self.space_account.depositor_count = self
                .space_account
                .depositor_count
                .checked_add(1)
                .ok_or(SpaceDaoError::MathOverflow)?;
        }

        self.depositor_record.total_deposited = self
            .depositor_record
            .total_deposited
            .checked_add(amount)
            .ok_or(SpaceDaoError::MathOverflow)?;
        self.space_account.total_deposits = self
            .space_account
            .total_deposits
            .checked_add(amount)
            .ok_or(SpaceDaoError::MathOverflow)?;

        let transfer_ctx = CpiContext::new(
            self.token_program.to_account_info(),
            Transfer {
                from: self.depositor_token_account.to_account_info(),
                to: self.treasury_token_account.to_account_info(),
                authority: self.depositor.to_account_info(),
            },
        );
        token::transfer(transfer_ctx, amount)?;

        msg!(
            "Deposit into space {}: depositor={}, amount={}, total_deposits={}",
            self.space_account.space_id,
            depositor,
            amount,
            self.space_account.total_deposits
        );

        emit!(Deposited {
            space: space_key,
            depositor,
            amount,
            total_deposits: self.space_account.total_deposits,
        });

        Ok(())
    }
}

use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::{state::*, errors::*, events::*, constants::*};

// Create Space Instructions
//
// create_space_dao: deposit ledger space, 3..=10 admins and a non-zero
// withdrawal_amount for bulk withdrawals.
// create_space_incentive: incentive pool, 1..=10 admins and a validated
// distribution config; withdrawal_amount starts unset (0).
//
// Both derive the treasury authority PDA and create its ATA for the
// space token. The ATA may already exist (anyone can create it).

#[derive(Accounts)]
#[instruction(space_id: u64)]
pub struct CreateSpace<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    // Seeds: ["space", creator, space_id]
    #[account(
        init,
        payer = creator,
        space = ANCHOR_DISCRIMINATOR + SpaceState::INIT_SPACE,
        seeds = [
            SPACE,
            creator.key().as_ref(),
            &space_id.to_le_bytes(),
        ],
        bump,
    )]
    pub space_account: Box<Account<'info, SpaceState>>,

    // Seeds: ["treasury_auth", space]
    /// CHECK: PDA used only as the signing authority of treasury token accounts
    #[account(
        seeds = [TREASURYAUTH, space_account.key().as_ref()],
        bump,
    )]
    pub treasury_authority: UncheckedAccount<'info>,

    pub token_mint: Box<Account<'info, Mint>>,

    #[account(
        init_if_needed,
        payer = creator,
        associated_token::mint = token_mint,
        associated_token::authority = treasury_authority,
    )]
    pub treasury_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> CreateSpace<'info> {
    pub fn create_space_dao(
        &mut self,
        space_id: u64,
        admins: Vec<Pubkey>,
        withdrawal_amount: u64,
        bumps: &CreateSpaceBumps,
    ) -> Result<()> {
        validate_admins(&admins, SpaceKind::Dao.min_admins())?;
        require!(
            withdrawal_amount > 0,
            SpaceDaoError::InvalidWithdrawalAmount
        );

        self.init_space(
            space_id,
            SpaceKind::Dao,
            admins,
            withdrawal_amount,
            IncentiveDistributionConfig::default(),
            bumps,
        )
    }

    pub fn create_space_incentive(
        &mut self,
        space_id: u64,
        admins: Vec<Pubkey>,
        config: IncentiveDistributionConfig,
        bumps: &CreateSpaceBumps,
    ) -> Result<()> {
        validate_admins(&admins, SpaceKind::Incentive.min_admins())?;
        config.validate()?;

        self.init_space(space_id, SpaceKind::Incentive, admins, 0, config, bumps)
    }

    fn init_space(
        &mut self,
        space_id: u64,
        kind: SpaceKind,
        admins: Vec<Pubkey>,
        withdrawal_amount: u64,
        incentive_config: IncentiveDistributionConfig,
        bumps: &CreateSpaceBumps,
    ) -> Result<()> {
        let admin_count = admins.len();

        self.space_account.set_inner(SpaceState {
            space_id,
            creator: self.creator.key(),
            kind,
            admins,
            active: true,
            token_mint: self.token_mint.key(),
            withdrawal_amount,
            total_deposits: 0,
            depositor_count: 0,
            share_withdrawal_count: 0,
            incentive_config,
            incentive_recipients: Vec::new(),
            incentive_round: 0,
            bump: bumps.space_account,
            treasury_bump: bumps.treasury_authority,
        });

        msg!(
            "Space {} created: kind={:?}, admins={}, token={}",
            space_id,
            kind,
            admin_count,
            self.token_mint.key()
        );

        emit!(SpaceCreated {
            space: self.space_account.key(),
            vault_authority: self.treasury_authority.key(),
            token_mint: self.token_mint.key(),
        });

        Ok(())
    }
}

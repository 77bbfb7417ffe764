use anchor_lang::prelude::*;
use anchor_spl::token::Token;
use crate::{state::*, errors::*, events::*, constants::*, helpers::*};

// Claim Incentive Instruction
//
// A selected recipient takes treasury_balance(token) divided by the number
// of recipients that have not claimed `token` this round. Each recipient
// claims each mint once per round; claims live in the
// ["incentive_claims", space, round, token] account, created by the first
// claimant of that mint.
//
// Token accounts are checked in the handler so the checks run in order:
// ZeroTokenAddress -> NotRecipient -> AlreadyClaimed -> NothingToClaim

#[derive(Accounts)]
#[instruction(token: Pubkey)]
pub struct ClaimIncentive<'info> {
    #[account(mut)]
    pub claimant: Signer<'info>,

    #[account(
        seeds = [
            SPACE,
            space_account.creator.as_ref(),
            &space_account.space_id.to_le_bytes(),
        ],
        bump = space_account.bump,
    )]
    pub space_account: Box<Account<'info, SpaceState>>,

    #[account(
        init_if_needed,
        payer = claimant,
        space = ANCHOR_DISCRIMINATOR + IncentiveClaims::INIT_SPACE,
        seeds = [
            INCENTIVE_CLAIMS,
            space_account.key().as_ref(),
            &space_account.incentive_round.to_le_bytes(),
            token.as_ref(),
        ],
        bump,
    )]
    pub incentive_claims: Box<Account<'info, IncentiveClaims>>,

    /// CHECK: PDA signing authority of the treasury token accounts
    #[account(
        seeds = [TREASURYAUTH, space_account.key().as_ref()],
        bump = space_account.treasury_bump,
    )]
    pub treasury_authority: UncheckedAccount<'info>,

    /// CHECK: validated against the ATA of treasury_authority for `token`
    #[account(mut)]
    pub treasury_token_account: UncheckedAccount<'info>,

    /// CHECK: validated as a `token` account owned by the claimant
    #[account(mut)]
    pub claimant_token_account: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> ClaimIncentive<'info> {
    pub fn claim_incentive(&mut self, token: Pubkey, bumps: &ClaimIncentiveBumps) -> Result<u64> {
        require!(token != Pubkey::default(), SpaceDaoError::ZeroTokenAddress);

        let claimant = self.claimant.key();
        let space_key = self.space_account.key();
        let round = self.space_account.incentive_round;

        require!(
            self.space_account.is_incentive_recipient(&claimant),
            SpaceDaoError::NotRecipient
        );

        // Fresh record from init_if_needed
        if self.incentive_claims.space == Pubkey::default() {
            self.incentive_claims.set_inner(IncentiveClaims {
                space: space_key,
                round,
                token,
                claimed: Vec::new(),
                bump: bumps.incentive_claims,
            });
        }

        require!(
            !self.incentive_claims.has_claimed(&claimant),
            SpaceDaoError::AlreadyClaimed
        );

        let balance = treasury_balance(
            &self.treasury_token_account,
            &self.treasury_authority.key(),
            &token,
        )?;
        let amount = self
            .space_account
            .incentive_amount(balance, self.incentive_claims.claimed_count());
        require!(amount > 0, SpaceDaoError::NothingToClaim);

        load_token_account(&self.claimant_token_account, &token, &claimant)?;

        // Effects before interactions
        self.incentive_claims.record(claimant)?;

        transfer_from_treasury(
            &self.token_program,
            self.treasury_token_account.to_account_info(),
            self.claimant_token_account.to_account_info(),
            self.treasury_authority.to_account_info(),
            &space_key,
            self.space_account.treasury_bump,
            amount,
        )?;

        msg!(
            "Incentive claimed from space {}: claimant={}, token={}, amount={}, round={}",
            self.space_account.space_id,
            claimant,
            token,
            amount,
            round
        );

        emit!(IncentiveClaimed {
            space: space_key,
            claimant,
            token,
            amount,
            round,
        });

        Ok(amount)
    }
}

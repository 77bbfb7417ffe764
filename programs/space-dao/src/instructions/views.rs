use anchor_lang::prelude::*;
use crate::{state::*, errors::*, constants::*, helpers::*};

// Read-only instructions
// Values are returned through Anchor return data; nothing is mutated.

#[derive(Accounts)]
pub struct ReadSpace<'info> {
    #[account(
        seeds = [
            SPACE,
            space_account.creator.as_ref(),
            &space_account.space_id.to_le_bytes(),
        ],
        bump = space_account.bump,
    )]
    pub space_account: Box<Account<'info, SpaceState>>,
}

// Live balance of one treasury ATA
#[derive(Accounts)]
pub struct ReadTreasury<'info> {
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

    /// CHECK: validated against the ATA of treasury_authority for the mint
    pub treasury_token_account: UncheckedAccount<'info>,
}

impl<'info> ReadTreasury<'info> {
    pub fn balance_of(&self, mint: &Pubkey) -> Result<u64> {
        treasury_balance(
            &self.treasury_token_account,
            &self.treasury_authority.key(),
            mint,
        )
    }
}

// Treasury ATA and claims account of one incentive mint in the current round
// The claims account does not exist until the first claim of that mint
#[derive(Accounts)]
#[instruction(token: Pubkey)]
pub struct ReadIncentive<'info> {
    #[account(
        seeds = [
            SPACE,
            space_account.creator.as_ref(),
            &space_account.space_id.to_le_bytes(),
        ],
        bump = space_account.bump,
    )]
    pub space_account: Box<Account<'info, SpaceState>>,

    /// CHECK: deserialized in the handler when initialized
    #[account(
        seeds = [
            INCENTIVE_CLAIMS,
            space_account.key().as_ref(),
            &space_account.incentive_round.to_le_bytes(),
            token.as_ref(),
        ],
        bump,
    )]
    pub incentive_claims: UncheckedAccount<'info>,

    /// CHECK: PDA signing authority of the treasury token accounts
    #[account(
        seeds = [TREASURYAUTH, space_account.key().as_ref()],
        bump = space_account.treasury_bump,
    )]
    pub treasury_authority: UncheckedAccount<'info>,

    /// CHECK: validated against the ATA of treasury_authority for `token`
    pub treasury_token_account: UncheckedAccount<'info>,
}

impl<'info> ReadIncentive<'info> {
    fn claims(&self) -> Result<Option<IncentiveClaims>> {
        load_incentive_claims(&self.incentive_claims)
    }

    pub fn incentive_amount(&self, token: Pubkey) -> Result<u64> {
        require!(token != Pubkey::default(), SpaceDaoError::ZeroTokenAddress);
        let balance = treasury_balance(
            &self.treasury_token_account,
            &self.treasury_authority.key(),
            &token,
        )?;
        let claimed = self.claims()?.map_or(0, |claims| claims.claimed_count());
        Ok(self.space_account.incentive_amount(balance, claimed))
    }

    pub fn is_claimed(&self, account: &Pubkey) -> Result<bool> {
        Ok(self
            .claims()?
            .map_or(false, |claims| claims.has_claimed(account)))
    }
}

// Depositor record plus the space token treasury
// The record may not exist: a non-depositor has nothing deposited
#[derive(Accounts)]
#[instruction(depositor: Pubkey)]
pub struct ReadDepositor<'info> {
    #[account(
        seeds = [
            SPACE,
            space_account.creator.as_ref(),
            &space_account.space_id.to_le_bytes(),
        ],
        bump = space_account.bump,
    )]
    pub space_account: Box<Account<'info, SpaceState>>,

    /// CHECK: deserialized in the handler when initialized
    #[account(
        seeds = [
            DEPOSITOR,
            space_account.key().as_ref(),
            depositor.as_ref(),
        ],
        bump,
    )]
    pub depositor_record: UncheckedAccount<'info>,

    /// CHECK: PDA signing authority of the treasury token accounts
    #[account(
        seeds = [TREASURYAUTH, space_account.key().as_ref()],
        bump = space_account.treasury_bump,
    )]
    pub treasury_authority: UncheckedAccount<'info>,

    /// CHECK: validated against the ATA of treasury_authority for the space token
    pub treasury_token_account: UncheckedAccount<'info>,
}

impl<'info> ReadDepositor<'info> {
    pub fn deposited(&self) -> Result<u64> {
        if self.depositor_record.owner != &crate::ID || self.depositor_record.data_is_empty() {
            return Ok(0);
        }
        let data = self.depositor_record.try_borrow_data()?;
        let record = Depositor::try_deserialize(&mut &data[..])?;
        Ok(record.total_deposited)
    }

    pub fn available_share(&self) -> Result<u64> {
        let balance = treasury_balance(
            &self.treasury_token_account,
            &self.treasury_authority.key(),
            &self.space_account.token_mint,
        )?;
        available_share(self.deposited()?, self.space_account.total_deposits, balance)
    }
}

#[derive(Accounts)]
#[instruction(withdrawal_id: u64)]
pub struct ReadShareWithdrawal<'info> {
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
        seeds = [
            SHARE_WITHDRAWAL,
            space_account.key().as_ref(),
            &withdrawal_id.to_le_bytes(),
        ],
        bump = share_withdrawal.bump,
        constraint = share_withdrawal.space == space_account.key() @ SpaceDaoError::InvalidProposal,
    )]
    pub share_withdrawal: Account<'info, ShareWithdrawal>,
}

impl<'info> ReadShareWithdrawal<'info> {
    pub fn is_approved_by(&self, approver: &Pubkey) -> bool {
        self.space_account
            .admin_index(approver)
            .map(|index| self.share_withdrawal.has_approved(index))
            .unwrap_or(false)
    }
}

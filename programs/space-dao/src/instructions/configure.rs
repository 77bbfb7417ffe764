use anchor_lang::prelude::*;
use crate::{state::*, errors::*, events::*, constants::*};

// Admin configuration: withdrawal amount and incentive distribution config

#[derive(Accounts)]
pub struct ConfigureSpace<'info> {
    pub admin: Signer<'info>,

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
}

impl<'info> ConfigureSpace<'info> {
    pub fn set_withdrawal_amount(&mut self, amount: u64) -> Result<()> {
        self.space_account.require_admin(&self.admin.key())?;
        require!(amount > 0, SpaceDaoError::InvalidWithdrawalAmount);

        self.space_account.withdrawal_amount = amount;

        msg!(
            "Space {} withdrawal amount set to {}",
            self.space_account.space_id,
            amount
        );

        emit!(WithdrawalAmountUpdated {
            space: self.space_account.key(),
            amount,
        });

        Ok(())
    }

    pub fn set_incentive_recipient_count(&mut self, num_of_targets: u32) -> Result<()> {
        self.space_account.require_admin(&self.admin.key())?;
        validate_target_count(num_of_targets)?;

        self.space_account.incentive_config.num_of_targets = num_of_targets;
        self.config_updated();
        Ok(())
    }

    pub fn set_incentive_ranking_bps(&mut self, ranking_bps: u16) -> Result<()> {
        self.space_account.require_admin(&self.admin.key())?;
        validate_ranking_bps(ranking_bps)?;

        self.space_account.incentive_config.ranking_bps = ranking_bps;
        self.config_updated();
        Ok(())
    }

    fn config_updated(&self) {
        let config = self.space_account.incentive_config;

        msg!(
            "Space {} incentive config: mode={:?}, num_of_targets={}, ranking_bps={}",
            self.space_account.space_id,
            config.mode,
            config.num_of_targets,
            config.ranking_bps
        );

        emit!(IncentiveConfigUpdated {
            space: self.space_account.key(),
            mode: config.mode,
            num_of_targets: config.num_of_targets,
            ranking_bps: config.ranking_bps,
        });
    }
}

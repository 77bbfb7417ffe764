use anchor_lang::prelude::*;
use crate::{state::*, events::*, constants::*, selection::*};

// Select Incentive Recipients Instruction
//
// Admin only. Replaces the recipient set with a fresh selection from
// (candidates, scores) and opens a new round; claims of earlier rounds
// no longer apply.
// The recipients are published in IncentiveRecipientsSelected and stored
// in the space; the instruction returns how many were selected.

#[derive(Accounts)]
pub struct SelectIncentiveRecipients<'info> {
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

impl<'info> SelectIncentiveRecipients<'info> {
    pub fn select_incentive_recipients(
        &mut self,
        candidates: Vec<Pubkey>,
        scores: Vec<u64>,
    ) -> Result<u32> {
        self.space_account.require_admin(&self.admin.key())?;

        let space_key = self.space_account.key();
        let clock = Clock::get()?;
        let mut rng = SeedRng::from_ledger(
            clock.slot,
            clock.unix_timestamp,
            &space_key,
            self.space_account.incentive_round,
        );

        let recipients = select_recipients(
            &candidates,
            &scores,
            &self.space_account.incentive_config,
            &mut rng,
        )?;
        let selected = recipients.len() as u32;

        let round = self.space_account.replace_incentive_recipients(recipients.clone())?;

        msg!(
            "Space {} round {}: selected {} of {} candidates ({:?})",
            self.space_account.space_id,
            round,
            selected,
            candidates.len(),
            self.space_account.incentive_config.mode
        );

        emit!(IncentiveRecipientsSelected {
            space: space_key,
            round,
            recipients,
        });

        Ok(selected)
    }
}

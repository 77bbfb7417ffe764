use anchor_lang::prelude::*;
use crate::{constants::*, errors::SpaceDaoError};

// Incentive claims of one mint in one round
// Seeds: ["incentive_claims", space, round, token]
// A claim is single-use per (recipient, token); a new round uses a new account.
#[account]
#[derive(InitSpace)]
pub struct IncentiveClaims {
    pub space: Pubkey,
    pub round: u64,
    pub token: Pubkey,

    #[max_len(MAX_INCENTIVE_TARGETS)]
    pub claimed: Vec<Pubkey>,

    pub bump: u8,
}

impl IncentiveClaims {
    pub fn has_claimed(&self, key: &Pubkey) -> bool {
        self.claimed.contains(key)
    }

    pub fn claimed_count(&self) -> usize {
        self.claimed.len()
    }

    pub fn record(&mut self, claimant: Pubkey) -> Result<()> {
        require!(!self.has_claimed(&claimant), SpaceDaoError::AlreadyClaimed);
        require!(
            self.claimed.len() < MAX_INCENTIVE_TARGETS,
            SpaceDaoError::MathOverflow
        );
        self.claimed.push(claimant);
        Ok(())
    }
}

// Claims of a mint that nobody has claimed yet: the account may not exist
pub fn load_incentive_claims(info: &AccountInfo) -> Result<Option<IncentiveClaims>> {
    if info.owner != &crate::ID || info.data_is_empty() {
        return Ok(None);
    }
    let data = info.try_borrow_data()?;
    Ok(Some(IncentiveClaims::try_deserialize(&mut &data[..])?))
}

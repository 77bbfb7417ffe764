use anchor_lang::prelude::*;
use crate::{constants::*, errors::SpaceDaoError};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum SpaceKind {
    // Deposit ledger with share withdrawals, at least 3 admins
    Dao,
    // Incentive pool, at least 1 admin
    Incentive,
}

impl SpaceKind {
    pub fn min_admins(&self) -> usize {
        match self {
            SpaceKind::Dao => MIN_DAO_ADMINS,
            SpaceKind::Incentive => MIN_INCENTIVE_ADMINS,
        }
    }
}

// Borsh variant index is the wire value: 0 random, 1 ranking, 2 mixed
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum SelectionMode {
    WeightedRandom,
    TopN,
    RankingWeighted,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct IncentiveDistributionConfig {
    pub mode: SelectionMode,
    pub num_of_targets: u32,
    pub ranking_bps: u16,
}

impl IncentiveDistributionConfig {
    pub fn validate(&self) -> Result<()> {
        validate_target_count(self.num_of_targets)?;
        validate_ranking_bps(self.ranking_bps)
    }
}

impl Default for IncentiveDistributionConfig {
    fn default() -> Self {
        Self {
            mode: SelectionMode::TopN,
            num_of_targets: 1,
            ranking_bps: 0,
        }
    }
}

pub fn validate_target_count(num_of_targets: u32) -> Result<()> {
    require!(
        num_of_targets > 0 && num_of_targets as usize <= MAX_INCENTIVE_TARGETS,
        SpaceDaoError::InvalidCount
    );
    Ok(())
}

pub fn validate_ranking_bps(ranking_bps: u16) -> Result<()> {
    require!(
        ranking_bps as u64 <= BPS_DENOMINATOR,
        SpaceDaoError::InvalidRange
    );
    Ok(())
}

// Space account
// Admin set, deposit ledger totals, bulk withdrawal setting and the
// current incentive round. Treasury tokens sit in ATAs owned by the
// treasury authority PDA, so balances are always read live.
// Claims are tracked per (round, mint) in IncentiveClaims accounts.
#[account]
#[derive(InitSpace)]
pub struct SpaceState {
    pub space_id: u64,
    pub creator: Pubkey,
    pub kind: SpaceKind,

    // Position in this list is the admin's bit in approval bitmaps
    #[max_len(MAX_ADMINS)]
    pub admins: Vec<Pubkey>,

    pub active: bool,

    // Deposit / withdrawal token
    pub token_mint: Pubkey,

    // Fixed per-recipient payout of distribute_withdrawal (0 = unset)
    pub withdrawal_amount: u64,

    // Sum of all live deposit units
    pub total_deposits: u64,

    // Distinct depositors ever seen, never decremented
    pub depositor_count: u64,

    pub share_withdrawal_count: u64,

    pub incentive_config: IncentiveDistributionConfig,

    #[max_len(MAX_INCENTIVE_TARGETS)]
    pub incentive_recipients: Vec<Pubkey>,

    pub incentive_round: u64,

    pub bump: u8,
    pub treasury_bump: u8,
}

impl SpaceState {
    pub fn is_admin(&self, key: &Pubkey) -> bool {
        self.admins.iter().any(|admin| admin == key)
    }

    pub fn admin_index(&self, key: &Pubkey) -> Option<usize> {
        self.admins.iter().position(|admin| admin == key)
    }

    pub fn required_approvals(&self) -> u8 {
        required_approvals(self.admins.len())
    }

    pub fn is_dao_active(&self) -> bool {
        self.active
    }

    pub fn require_admin(&self, key: &Pubkey) -> Result<usize> {
        self.admin_index(key)
            .ok_or_else(|| error!(SpaceDaoError::NotAdmin))
    }

    pub fn is_incentive_recipient(&self, key: &Pubkey) -> bool {
        self.incentive_recipients.contains(key)
    }

    // Per-recipient amount of one mint: balance split across the recipients
    // that have not claimed that mint yet. Remainder stays in the treasury
    pub fn incentive_amount(&self, balance: u64, claimed_count: usize) -> u64 {
        match self.incentive_recipients.len().saturating_sub(claimed_count) {
            0 => 0,
            unclaimed => balance / unclaimed as u64,
        }
    }

    // Starts a new round: claims of earlier rounds live under the old round
    // number and no longer apply
    pub fn replace_incentive_recipients(&mut self, recipients: Vec<Pubkey>) -> Result<u64> {
        self.incentive_recipients = recipients;
        self.incentive_round = self
            .incentive_round
            .checked_add(1)
            .ok_or(SpaceDaoError::MathOverflow)?;
        Ok(self.incentive_round)
    }

    pub fn recipient_page(&self, offset: u32) -> Vec<Pubkey> {
        self.incentive_recipients
            .iter()
            .skip(offset as usize)
            .take(RECIPIENT_PAGE_SIZE)
            .copied()
            .collect()
    }
}

// Strict majority: floor(n / 2) + 1
pub fn required_approvals(admin_count: usize) -> u8 {
    (admin_count / 2 + 1) as u8
}

pub fn validate_admins(admins: &[Pubkey], min_admins: usize) -> Result<()> {
    require!(
        admins.len() >= min_admins && admins.len() <= MAX_ADMINS,
        SpaceDaoError::InvalidAdminCount
    );

    for (i, admin) in admins.iter().enumerate() {
        require!(*admin != Pubkey::default(), SpaceDaoError::InvalidAdmin);
        require!(
            !admins[..i].contains(admin),
            SpaceDaoError::DuplicateAdmin
        );
    }

    Ok(())
}

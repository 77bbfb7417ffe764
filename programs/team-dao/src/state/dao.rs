use anchor_lang::prelude::*;
use crate::{constants::*, errors::TeamDaoError};

// Team DAO account
// Fixed admin set plus the proposal counter
// Treasury tokens are held by ATAs owned by the vault PDA
#[account]
#[derive(InitSpace)]
pub struct TeamDao {
    // Unique identifier chosen by the creator
    pub dao_id: u64,

    // Account that paid for the DAO (not necessarily an admin)
    pub creator: Pubkey,

    // Admin set, immutable after creation
    // Position in this list is the admin's bit in the approval bitmap
    #[max_len(MAX_ADMINS)]
    pub admins: Vec<Pubkey>,

    // Whether new proposals are accepted
    pub active: bool,

    // Total proposals ever created, next proposal id
    pub proposal_count: u64,

    pub bump: u8,
    pub vault_bump: u8,
}

impl TeamDao {
    pub fn is_admin(&self, key: &Pubkey) -> bool {
        self.admins.iter().any(|admin| admin == key)
    }

    pub fn admin_index(&self, key: &Pubkey) -> Option<usize> {
        self.admins.iter().position(|admin| admin == key)
    }

    // Strict majority: floor(n / 2) + 1
    pub fn required_approvals(&self) -> u8 {
        required_approvals(self.admins.len())
    }

    pub fn is_dao_active(&self) -> bool {
        self.active
    }
}

pub fn required_approvals(admin_count: usize) -> u8 {
    (admin_count / 2 + 1) as u8
}

// Validate a candidate admin list before it is stored
pub fn validate_admins(admins: &[Pubkey]) -> Result<()> {
    require!(
        admins.len() >= MIN_ADMINS && admins.len() <= MAX_ADMINS,
        TeamDaoError::InvalidAdminCount
    );

    for (i, admin) in admins.iter().enumerate() {
        require!(*admin != Pubkey::default(), TeamDaoError::InvalidAdmin);
        require!(
            !admins[..i].contains(admin),
            TeamDaoError::DuplicateAdmin
        );
    }

    Ok(())
}

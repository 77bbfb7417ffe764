pub const ANCHOR_DISCRIMINATOR: usize = 8;

// Seeds for PDA derivation: ["team_dao", creator, dao_id]
pub const TEAM_DAO: &[u8] = b"team_dao";

// Seeds for PDA derivation: ["proposal", team_dao, proposal_id]
pub const PROPOSAL: &[u8] = b"proposal";

// Seeds for PDA derivation: ["vault", team_dao]
// Signing authority of the treasury token accounts (one ATA per mint)
pub const VAULT: &[u8] = b"vault";

// Admin set bounds
// The approval bitmap is a u64, MAX_ADMINS must stay below 64
pub const MIN_ADMINS: usize = 3;
pub const MAX_ADMINS: usize = 10;

// Number of (recipient, amount) pairs allowed in a single batch proposal
pub const MAX_BATCH_TRANSFERS: usize = 100;

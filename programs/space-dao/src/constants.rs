pub const ANCHOR_DISCRIMINATOR: usize = 8;

// Seeds for PDA derivation: ["space", creator, space_id]
pub const SPACE: &[u8] = b"space";

// Seeds for PDA derivation: ["treasury_auth", space]
// Signing authority of the treasury token accounts (one ATA per mint)
pub const TREASURYAUTH: &[u8] = b"treasury_auth";

// Seeds for PDA derivation: ["depositor", space, depositor]
pub const DEPOSITOR: &[u8] = b"depositor";

// Seeds for PDA derivation: ["share_withdrawal", space, withdrawal_id]
pub const SHARE_WITHDRAWAL: &[u8] = b"share_withdrawal";

// Seeds for PDA derivation: ["incentive_claims", space, round, token]
pub const INCENTIVE_CLAIMS: &[u8] = b"incentive_claims";

// Admin set bounds
// The approval bitmap is a u64, MAX_ADMINS must stay below 64
pub const MIN_DAO_ADMINS: usize = 3;
pub const MIN_INCENTIVE_ADMINS: usize = 1;
pub const MAX_ADMINS: usize = 10;

// Upper bound for incentive_recipients / num_of_targets
pub const MAX_INCENTIVE_TARGETS: usize = 100;

// Recipients accepted by a single bulk distribution
pub const MAX_DISTRIBUTION_RECIPIENTS: usize = 100;

// Return data is limited to 1024 bytes: 4 + 30 * 32 fits
pub const RECIPIENT_PAGE_SIZE: usize = 30;

pub const BPS_DENOMINATOR: u64 = 10_000;

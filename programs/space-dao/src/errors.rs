use anchor_lang::prelude::*;

#[error_code]
pub enum SpaceDaoError {
    // Authorization errors
    #[msg("Caller is not an admin of this space")]
    NotAdmin,

    #[msg("Caller is not a selected incentive recipient")]
    NotRecipient,

    #[msg("Caller has never deposited into this space")]
    NotDepositor,

    // Admin set errors
    #[msg("Admin count is outside the allowed range")]
    InvalidAdminCount,

    #[msg("Admin address cannot be the zero address")]
    InvalidAdmin,

    #[msg("Admin address is listed more than once")]
    DuplicateAdmin,

    #[msg("Space is not accepting proposals")]
    DaoInactive,

    // Input validation errors
    #[msg("Token address cannot be zero")]
    ZeroTokenAddress,

    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Withdrawal amount must be greater than zero")]
    InvalidWithdrawalAmount,

    #[msg("Too many recipients for a single distribution")]
    InvalidBatchSize,

    #[msg("Recipient list is empty")]
    EmptyRecipients,

    #[msg("Recipient address cannot be zero")]
    InvalidRecipient,

    #[msg("Token account does not belong to the expected mint")]
    InvalidTokenMint,

    #[msg("Recipient token accounts do not match the recipient list")]
    RecipientAccountMismatch,

    // Incentive selection errors
    #[msg("Candidates and scores must have the same length")]
    LengthMismatch,

    #[msg("Candidate set is empty")]
    EmptyCandidateSet,

    #[msg("Candidate is listed more than once")]
    DuplicateCandidate,

    #[msg("Recipient count must be between 1 and 100")]
    InvalidCount,

    #[msg("Ranking basis points must be between 0 and 10000")]
    InvalidRange,

    // Proposal state errors
    #[msg("Share withdrawal does not belong to this space")]
    InvalidProposal,

    #[msg("Admin has already approved this share withdrawal")]
    AlreadyApproved,

    #[msg("Share withdrawal has already been executed")]
    AlreadyExecuted,

    #[msg("Incentive has already been claimed this round")]
    AlreadyClaimed,

    // Resource errors
    #[msg("Treasury token balance is insufficient")]
    InsufficientBalance,

    #[msg("Amount exceeds the depositor's available share")]
    InsufficientShare,

    #[msg("Incentive amount is zero")]
    NothingToClaim,

    // Arithmetic errors
    #[msg("Arithmetic overflow")]
    MathOverflow,
}

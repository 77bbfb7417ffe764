use anchor_lang::prelude::*;

#[error_code]
pub enum TeamDaoError {
    // Admin set errors
    #[msg("Caller is not an admin of this DAO")]
    NotAdmin,

    #[msg("Admin count is outside the allowed range")]
    InvalidAdminCount,

    #[msg("Admin address cannot be the zero address")]
    InvalidAdmin,

    #[msg("Admin address is listed more than once")]
    DuplicateAdmin,

    #[msg("DAO is not accepting proposals")]
    DaoInactive,

    // Proposal validation errors
    #[msg("Token address cannot be zero")]
    ZeroTokenAddress,

    #[msg("Batch must contain between 1 and 100 transfers")]
    InvalidBatchSize,

    #[msg("Recipient address cannot be zero")]
    InvalidRecipient,

    #[msg("Transfer amount must be greater than zero")]
    InvalidAmount,

    #[msg("Proposal does not belong to this DAO")]
    InvalidProposal,

    // Approval errors
    #[msg("Admin has already approved this proposal")]
    AlreadyApproved,

    #[msg("Proposal has already been executed")]
    AlreadyExecuted,

    // Execution errors
    #[msg("Token mint does not match the proposal token")]
    InvalidTokenMint,

    #[msg("Recipient token accounts do not match the proposal transfers")]
    RecipientAccountMismatch,

    #[msg("Treasury token balance is insufficient for this batch")]
    InsufficientBalance,

    // Arithmetic errors
    #[msg("Arithmetic overflow")]
    MathOverflow,
}

use anchor_lang::prelude::*;
use anchor_spl::token::{self, TokenAccount};

use crate::errors::TeamDaoError;

// Recipient accounts arrive through remaining_accounts, so they are
// validated by hand: SPL token account, proposal mint, listed recipient
pub fn load_recipient_token_account(
    info: &AccountInfo,
    mint: &Pubkey,
    recipient: &Pubkey,
) -> Result<TokenAccount> {
    require_keys_eq!(
        *info.owner,
        token::ID,
        TeamDaoError::RecipientAccountMismatch
    );
    require!(info.is_writable, TeamDaoError::RecipientAccountMismatch);

    let data = info.try_borrow_data()?;
    let account = TokenAccount::try_deserialize(&mut &data[..])?;

    require!(
        account.mint == *mint && account.owner == *recipient,
        TeamDaoError::RecipientAccountMismatch
    );

    Ok(account)
}

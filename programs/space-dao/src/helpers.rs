use anchor_lang::prelude::*;
use anchor_spl::associated_token::get_associated_token_address;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{constants::*, errors::SpaceDaoError};

// ======================== SHARE MATH ========================

// Depositor's pro-rata claim on the live treasury balance
// deposited * balance / total_deposits, floor, 128-bit intermediate
pub fn available_share(deposited: u64, total_deposits: u64, balance: u64) -> Result<u64> {
    if total_deposits == 0 || deposited == 0 {
        return Ok(0);
    }

    let share = (deposited as u128)
        .checked_mul(balance as u128)
        .ok_or(SpaceDaoError::MathOverflow)?
        / total_deposits as u128;

    u64::try_from(share).map_err(|_| error!(SpaceDaoError::MathOverflow))
}

// Deposit units retired when `amount` tokens leave as a share withdrawal
// ceil(amount * total_deposits / balance), capped at the depositor's units.
// Rounding up keeps every remaining share backed by the balance.
pub fn units_to_burn(
    amount: u64,
    deposited: u64,
    total_deposits: u64,
    balance: u64,
) -> Result<u64> {
    require!(balance > 0, SpaceDaoError::InsufficientBalance);

    let numerator = (amount as u128)
        .checked_mul(total_deposits as u128)
        .ok_or(SpaceDaoError::MathOverflow)?;
    let units = numerator.div_ceil(balance as u128);

    let units = u64::try_from(units).map_err(|_| error!(SpaceDaoError::MathOverflow))?;
    Ok(units.min(deposited))
}

// ======================== TOKEN ACCOUNTS ========================

// Token accounts passed unchecked (remaining accounts, or treasury ATAs of
// an arbitrary mint) are validated here: SPL token account, mint, owner
pub fn load_token_account(
    info: &AccountInfo,
    mint: &Pubkey,
    owner: &Pubkey,
) -> Result<TokenAccount> {
    require_keys_eq!(
        *info.owner,
        token::ID,
        SpaceDaoError::RecipientAccountMismatch
    );
    require!(info.is_writable, SpaceDaoError::RecipientAccountMismatch);

    let data = info.try_borrow_data()?;
    let account = TokenAccount::try_deserialize(&mut &data[..])?;

    require!(
        account.mint == *mint && account.owner == *owner,
        SpaceDaoError::RecipientAccountMismatch
    );

    Ok(account)
}

// Balance of the treasury ATA for `mint`
// A treasury ATA that was never created holds nothing
pub fn treasury_balance(info: &AccountInfo, treasury_authority: &Pubkey, mint: &Pubkey) -> Result<u64> {
    require_keys_eq!(
        info.key(),
        get_associated_token_address(treasury_authority, mint),
        SpaceDaoError::InvalidTokenMint
    );

    if info.data_is_empty() {
        return Ok(0);
    }

    require_keys_eq!(*info.owner, token::ID, SpaceDaoError::InvalidTokenMint);
    let data = info.try_borrow_data()?;
    let account = TokenAccount::try_deserialize(&mut &data[..])?;
    Ok(account.amount)
}

// ======================== TRANSFERS ========================

// Move tokens out of a treasury ATA, signed by the treasury authority PDA
pub fn transfer_from_treasury<'info>(
    token_program: &Program<'info, Token>,
    from: AccountInfo<'info>,
    to: AccountInfo<'info>,
    treasury_authority: AccountInfo<'info>,
    space: &Pubkey,
    treasury_bump: u8,
    amount: u64,
) -> Result<()> {
    let treasury_auth_seeds = &[TREASURYAUTH, space.as_ref(), &[treasury_bump]];
    let signer_seeds = &[&treasury_auth_seeds[..]];

    let transfer_ctx = CpiContext::new_with_signer(
        token_program.to_account_info(),
        Transfer {
            from,
            to,
            authority: treasury_authority,
        },
        signer_seeds,
    );
    token::transfer(transfer_ctx, amount)
}

// Shared checks of both bulk payouts, in order:
// EmptyRecipients -> InvalidBatchSize -> InsufficientBalance ->
// InvalidRecipient -> RecipientAccountMismatch
pub fn validate_distribution(
    recipients: &[Pubkey],
    recipient_accounts: &[AccountInfo],
    mint: &Pubkey,
    amount_each: u64,
    balance: u64,
) -> Result<u64> {
    require!(!recipients.is_empty(), SpaceDaoError::EmptyRecipients);
    require!(
        recipients.len() <= MAX_DISTRIBUTION_RECIPIENTS,
        SpaceDaoError::InvalidBatchSize
    );

    let total = amount_each
        .checked_mul(recipients.len() as u64)
        .ok_or(SpaceDaoError::MathOverflow)?;
    require!(balance >= total, SpaceDaoError::InsufficientBalance);

    for recipient in recipients.iter() {
        require!(
            *recipient != Pubkey::default(),
            SpaceDaoError::InvalidRecipient
        );
    }

    require!(
        recipient_accounts.len() == recipients.len(),
        SpaceDaoError::RecipientAccountMismatch
    );
    for (recipient, info) in recipients.iter().zip(recipient_accounts.iter()) {
        load_token_account(info, mint, recipient)?;
    }

    Ok(total)
}

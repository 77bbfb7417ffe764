// Space DAO Program
//
// Space treasuries governed by a fixed admin set:
// - Deposit ledger: depositors own a pro-rata share of the live treasury
//   balance and withdraw it through majority-approved share withdrawals
// - Bulk payouts: admins push a fixed withdrawal amount, or any treasury
//   token, to a list of recipients
// - Incentives: admins select recipients from scored candidates (top-N,
//   ranking-weighted, weighted random); each recipient claims once per round
//
// get_*/is_* instructions are read-only views returned through return data

use anchor_lang::prelude::*;
pub mod constants;
pub mod errors;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod selection;
pub mod state;

pub use errors::*;
pub use events::*;
pub use instructions::*;
pub use state::*;

declare_id!("4ucdG6125pS8kNxMYzYhLBkbgKK4YEMvRWhXGtgafNdH");

#[program]
pub mod space_dao {
    use super::*;

    // ======================== CREATION ========================

    pub fn create_space_dao(
        ctx: Context<CreateSpace>,
        space_id: u64,
        admins: Vec<Pubkey>,
        withdrawal_amount: u64,
    ) -> Result<()> {
        ctx.accounts
            .create_space_dao(space_id, admins, withdrawal_amount, &ctx.bumps)
    }

    pub fn create_space_incentive(
        ctx: Context<CreateSpace>,
        space_id: u64,
        admins: Vec<Pubkey>,
        config: IncentiveDistributionConfig,
    ) -> Result<()> {
        ctx.accounts
            .create_space_incentive(space_id, admins, config, &ctx.bumps)
    }

    // ======================== DEPOSIT LEDGER ========================

    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        ctx.accounts.deposit(amount, &ctx.bumps)
    }

    // Returns the new withdrawal id
    pub fn propose_share_withdrawal(
        ctx: Context<ProposeShareWithdrawal>,
        amount: u64,
    ) -> Result<u64> {
        ctx.accounts.propose_share_withdrawal(amount, &ctx.bumps)
    }

    pub fn approve_share_withdrawal(
        ctx: Context<ApproveShareWithdrawal>,
        _withdrawal_id: u64,
    ) -> Result<()> {
        ctx.accounts.approve_share_withdrawal()
    }

    // ======================== BULK PAYOUTS ========================

    // Remaining accounts: recipient token accounts in recipient order
    pub fn distribute_withdrawal<'info>(
        ctx: Context<'_, '_, 'info, 'info, DistributeWithdrawal<'info>>,
        recipients: Vec<Pubkey>,
    ) -> Result<()> {
        ctx.accounts
            .distribute_withdrawal(recipients, ctx.remaining_accounts)
    }

    // Remaining accounts: recipient token accounts in recipient order
    pub fn distribute<'info>(
        ctx: Context<'_, '_, 'info, 'info, Distribute<'info>>,
        token: Pubkey,
        recipients: Vec<Pubkey>,
        value: u64,
    ) -> Result<()> {
        ctx.accounts
            .distribute(token, recipients, value, ctx.remaining_accounts)
    }

    // ======================== CONFIGURATION ========================

    pub fn set_withdrawal_amount(ctx: Context<ConfigureSpace>, amount: u64) -> Result<()> {
        ctx.accounts.set_withdrawal_amount(amount)
    }

    pub fn set_incentive_recipient_count(
        ctx: Context<ConfigureSpace>,
        num_of_targets: u32,
    ) -> Result<()> {
        ctx.accounts.set_incentive_recipient_count(num_of_targets)
    }

    pub fn set_incentive_ranking_bps(ctx: Context<ConfigureSpace>, ranking_bps: u16) -> Result<()> {
        ctx.accounts.set_incentive_ranking_bps(ranking_bps)
    }

    // ======================== INCENTIVES ========================

    // Returns the number of recipients selected
    pub fn select_incentive_recipients(
        ctx: Context<SelectIncentiveRecipients>,
        candidates: Vec<Pubkey>,
        scores: Vec<u64>,
    ) -> Result<u32> {
        ctx.accounts.select_incentive_recipients(candidates, scores)
    }

    // Returns the amount claimed
    pub fn claim_incentive(ctx: Context<ClaimIncentive>, token: Pubkey) -> Result<u64> {
        ctx.accounts.claim_incentive(token, &ctx.bumps)
    }

    // ======================== VIEWS ========================

    pub fn is_admin(ctx: Context<ReadSpace>, identity: Pubkey) -> Result<bool> {
        Ok(ctx.accounts.space_account.is_admin(&identity))
    }

    pub fn get_admins(ctx: Context<ReadSpace>) -> Result<Vec<Pubkey>> {
        Ok(ctx.accounts.space_account.admins.clone())
    }

    pub fn get_required_approvals(ctx: Context<ReadSpace>) -> Result<u8> {
        Ok(ctx.accounts.space_account.required_approvals())
    }

    pub fn is_dao_active(ctx: Context<ReadSpace>) -> Result<bool> {
        Ok(ctx.accounts.space_account.is_dao_active())
    }

    pub fn get_token_mint(ctx: Context<ReadSpace>) -> Result<Pubkey> {
        Ok(ctx.accounts.space_account.token_mint)
    }

    pub fn get_withdrawal_amount(ctx: Context<ReadSpace>) -> Result<u64> {
        Ok(ctx.accounts.space_account.withdrawal_amount)
    }

    pub fn get_depositor_count(ctx: Context<ReadSpace>) -> Result<u64> {
        Ok(ctx.accounts.space_account.depositor_count)
    }

    pub fn get_share_withdrawal_count(ctx: Context<ReadSpace>) -> Result<u64> {
        Ok(ctx.accounts.space_account.share_withdrawal_count)
    }

    pub fn get_incentive_distribution_config(
        ctx: Context<ReadSpace>,
    ) -> Result<IncentiveDistributionConfig> {
        Ok(ctx.accounts.space_account.incentive_config)
    }

    // Up to 30 recipients starting at `offset`
    pub fn get_incentive_recipients(ctx: Context<ReadSpace>, offset: u32) -> Result<Vec<Pubkey>> {
        Ok(ctx.accounts.space_account.recipient_page(offset))
    }

    pub fn is_incentive_recipient(ctx: Context<ReadSpace>, account: Pubkey) -> Result<bool> {
        Ok(ctx.accounts.space_account.is_incentive_recipient(&account))
    }

    // Whether `account` claimed `token` in the current round
    pub fn is_incentive_claimed(
        ctx: Context<ReadIncentive>,
        _token: Pubkey,
        account: Pubkey,
    ) -> Result<bool> {
        ctx.accounts.is_claimed(&account)
    }

    // Treasury balance of the space token
    pub fn get_balance(ctx: Context<ReadTreasury>) -> Result<u64> {
        let mint = ctx.accounts.space_account.token_mint;
        ctx.accounts.balance_of(&mint)
    }

    pub fn get_incentive_amount(ctx: Context<ReadIncentive>, token: Pubkey) -> Result<u64> {
        ctx.accounts.incentive_amount(token)
    }

    pub fn get_depositor_deposit(ctx: Context<ReadDepositor>, _depositor: Pubkey) -> Result<u64> {
        ctx.accounts.deposited()
    }

    pub fn get_available_share(ctx: Context<ReadDepositor>, _depositor: Pubkey) -> Result<u64> {
        ctx.accounts.available_share()
    }

    pub fn get_share_withdrawal(
        ctx: Context<ReadShareWithdrawal>,
        _withdrawal_id: u64,
    ) -> Result<ShareWithdrawalInfo> {
        Ok(ctx.accounts.share_withdrawal.info())
    }

    pub fn is_share_withdrawal_approved(
        ctx: Context<ReadShareWithdrawal>,
        _withdrawal_id: u64,
        approver: Pubkey,
    ) -> Result<bool> {
        Ok(ctx.accounts.is_approved_by(&approver))
    }
}

use anchor_lang::prelude::*;

pub mod constants;
pub mod engine;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod ledgers;
pub mod state;

use instructions::*;

declare_id!("4TbaBaf6knsLE1RMJT9JsLxNWmujWV7izBTHoFBJxxYb");

#[program]
pub mod conversion_escrow {
    use super::*;

    // ============ Engine Initialization ============

    /// Initialize the engine (one-time setup)
    /// An empty administrator list makes the caller the sole administrator
    pub fn initialize(
        ctx: Context<Initialize>,
        administrators: Vec<Pubkey>,
        min_investment: Option<u64>,
    ) -> Result<()> {
        instructions::initialize::handler(ctx, administrators, min_investment)
    }

    // ============ Depositor Flow ============

    /// Deposit lamports, pending conversion at the next published rate
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit::handler(ctx, amount)
    }

    /// Convert the caller's pending amount into the target asset
    /// Partially fills and refunds when the asset pool falls short
    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        instructions::claim::handler(ctx)
    }

    // ============ Treasury ============

    /// Withdraw lamports not owed to pending depositors
    pub fn withdraw_bounded(ctx: Context<WithdrawBase>, amount: u64) -> Result<()> {
        instructions::treasury::withdraw_bounded_handler(ctx, amount)
    }

    /// Withdraw every held lamport, pending liabilities included
    /// Wind-down only: pending amounts are left unbacked
    pub fn withdraw_all(ctx: Context<WithdrawBase>) -> Result<()> {
        instructions::treasury::withdraw_all_handler(ctx)
    }

    /// Move the whole asset inventory out of the vault
    pub fn sweep_assets(ctx: Context<SweepAssets>) -> Result<()> {
        instructions::treasury::sweep_assets_handler(ctx)
    }

    // ============ Admin Functions ============

    pub fn set_min_investment(ctx: Context<SetMinInvestment>, amount: u64) -> Result<()> {
        instructions::admin::set_min_investment_handler(ctx, amount)
    }

    /// Lift a suspension once the asset vault holds inventory again
    pub fn resume(ctx: Context<Resume>) -> Result<()> {
        instructions::admin::resume_handler(ctx)
    }

    // ============ Views ============

    pub fn pending_amount(ctx: Context<ViewDepositor>) -> Result<u64> {
        instructions::views::pending_amount_handler(ctx)
    }

    pub fn request_time(ctx: Context<ViewDepositor>) -> Result<i64> {
        instructions::views::request_time_handler(ctx)
    }

    /// True once a rate newer than the depositor's last deposit is published
    pub fn is_eligible(ctx: Context<ViewDepositor>) -> Result<bool> {
        instructions::views::is_eligible_handler(ctx)
    }

    pub fn is_suspended(ctx: Context<ViewEngine>) -> Result<bool> {
        instructions::views::is_suspended_handler(ctx)
    }

    pub fn min_investment(ctx: Context<ViewEngine>) -> Result<u64> {
        instructions::views::min_investment_handler(ctx)
    }

    pub fn administrators(ctx: Context<ViewEngine>) -> Result<Vec<Pubkey>> {
        instructions::views::administrators_handler(ctx)
    }

    pub fn available_for_withdrawal(ctx: Context<ViewTreasury>) -> Result<u64> {
        instructions::views::available_for_withdrawal_handler(ctx)
    }
}

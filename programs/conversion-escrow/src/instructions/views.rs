//! Read-only queries, returned through `set_return_data`

use anchor_lang::prelude::*;
use anchor_lang::solana_program::rent::Rent;
use crate::constants::*;
use crate::engine;
use crate::errors::EscrowError;
use crate::ledgers::RateFeed;
use crate::state::*;

#[derive(Accounts)]
pub struct ViewEngine<'info> {
    #[account(
        seeds = [ENGINE_STATE_SEED],
        bump = engine_state.bump
    )]
    pub engine_state: Account<'info, EngineState>,
}

#[derive(Accounts)]
pub struct ViewDepositor<'info> {
    #[account(
        seeds = [ENGINE_STATE_SEED],
        bump = engine_state.bump
    )]
    pub engine_state: Account<'info, EngineState>,

    /// CHECK: Depositor whose record is read
    pub depositor: UncheckedAccount<'info>,

    /// Absent for a wallet that never deposited
    #[account(
        seeds = [DEPOSITOR_RECORD_SEED, depositor.key().as_ref()],
        bump
    )]
    pub depositor_record: Option<Account<'info, DepositorRecord>>,

    /// CHECK: Oracle rate feed pinned at initialization
    #[account(
        address = engine_state.rate_feed @ EscrowError::InvalidAccountData
    )]
    pub rate_feed: UncheckedAccount<'info>,
}

#[derive(Accounts)]
pub struct ViewTreasury<'info> {
    #[account(
        seeds = [ENGINE_STATE_SEED],
        bump = engine_state.bump
    )]
    pub engine_state: Account<'info, EngineState>,

    /// CHECK: PDA that holds deposited lamports
    #[account(
        seeds = [BASE_VAULT_SEED],
        bump = engine_state.base_vault_bump
    )]
    pub base_vault: SystemAccount<'info>,
}

pub fn pending_amount_handler(ctx: Context<ViewDepositor>) -> Result<u64> {
    let record = DepositorRecord::or_empty(ctx.accounts.depositor_record.as_deref());
    Ok(record.pending_amount)
}

pub fn request_time_handler(ctx: Context<ViewDepositor>) -> Result<i64> {
    let record = DepositorRecord::or_empty(ctx.accounts.depositor_record.as_deref());
    Ok(record.request_time)
}

pub fn is_eligible_handler(ctx: Context<ViewDepositor>) -> Result<bool> {
    let feed = RateFeed::load(&ctx.accounts.rate_feed.to_account_info())?;
    Ok(engine::rate_gate::record_is_eligible(
        ctx.accounts.depositor_record.as_deref(),
        feed.last_update_time,
    ))
}

pub fn is_suspended_handler(ctx: Context<ViewEngine>) -> Result<bool> {
    Ok(ctx.accounts.engine_state.suspended)
}

pub fn min_investment_handler(ctx: Context<ViewEngine>) -> Result<u64> {
    Ok(ctx.accounts.engine_state.min_investment)
}

pub fn administrators_handler(ctx: Context<ViewEngine>) -> Result<Vec<Pubkey>> {
    Ok(ctx.accounts.engine_state.administrators.clone())
}

pub fn available_for_withdrawal_handler(ctx: Context<ViewTreasury>) -> Result<u64> {
    let held = ctx
        .accounts
        .base_vault
        .lamports()
        .saturating_sub(Rent::get()?.minimum_balance(0));
    Ok(engine::treasury::available_for_withdrawal(
        &ctx.accounts.engine_state,
        held,
    ))
}

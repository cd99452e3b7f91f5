use std::cell::RefCell;

use anchor_lang::prelude::*;
use anchor_lang::solana_program::rent::Rent;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::engine;
use crate::errors::EscrowError;
use crate::ledgers::{AssetVault, BaseVault, Checkpoint, RateFeed};
use crate::state::*;

#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(mut)]
    pub depositor: Signer<'info>,

    #[account(
        mut,
        seeds = [ENGINE_STATE_SEED],
        bump = engine_state.bump
    )]
    pub engine_state: Account<'info, EngineState>,

    /// Absent for a wallet that never deposited; the claim then has
    /// nothing pending
    #[account(
        mut,
        seeds = [DEPOSITOR_RECORD_SEED, depositor.key().as_ref()],
        bump
    )]
    pub depositor_record: Option<Account<'info, DepositorRecord>>,

    /// CHECK: PDA that holds deposited lamports
    #[account(
        mut,
        seeds = [BASE_VAULT_SEED],
        bump = engine_state.base_vault_bump
    )]
    pub base_vault: SystemAccount<'info>,

    #[account(
        mut,
        seeds = [ASSET_VAULT_SEED],
        bump = engine_state.asset_vault_bump,
        token::mint = asset_mint,
        token::authority = engine_state,
    )]
    pub asset_vault: InterfaceAccount<'info, TokenAccount>,

    #[account(
        address = engine_state.asset_mint @ EscrowError::InvalidAccountData
    )]
    pub asset_mint: InterfaceAccount<'info, Mint>,

    /// Depositor's token account receiving the converted asset
    #[account(
        mut,
        token::mint = asset_mint,
        token::authority = depositor,
    )]
    pub depositor_asset_account: InterfaceAccount<'info, TokenAccount>,

    /// CHECK: Oracle rate feed pinned at initialization
    #[account(
        address = engine_state.rate_feed @ EscrowError::InvalidAccountData
    )]
    pub rate_feed: UncheckedAccount<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Claim>) -> Result<()> {
    let clock = Clock::get()?;
    let rent_reserve = Rent::get()?.minimum_balance(0);
    let depositor = ctx.accounts.depositor.key();

    // The engine core works on RefCell-held copies, the same shape as
    // account data, so the reentrancy lock is observable mid-call
    let engine_cell = RefCell::new((*ctx.accounts.engine_state).clone());
    let record_cell = RefCell::new(DepositorRecord::or_empty(
        ctx.accounts.depositor_record.as_deref(),
    ));

    let receipt = {
        let accounts = &ctx.accounts;
        let rates = RateFeed::load(&accounts.rate_feed.to_account_info())?;

        let mut assets = AssetVault {
            vault: &accounts.asset_vault,
            mint: &accounts.asset_mint,
            destination: &accounts.depositor_asset_account,
            authority: accounts.engine_state.to_account_info(),
            authority_bump: accounts.engine_state.bump,
            token_program: &accounts.token_program,
            checkpoint: Some(Checkpoint {
                info: accounts.engine_state.to_account_info(),
                state: &engine_cell,
            }),
            sent: 0,
        };
        let mut base = BaseVault {
            vault: accounts.base_vault.to_account_info(),
            vault_bump: accounts.engine_state.base_vault_bump,
            destination: accounts.depositor.to_account_info(),
            system_program: accounts.system_program.to_account_info(),
            rent_reserve,
            checkpoint: Some(Checkpoint {
                info: accounts.engine_state.to_account_info(),
                state: &engine_cell,
            }),
        };

        engine::conversion::claim(
            &engine_cell,
            &record_cell,
            &depositor,
            clock.unix_timestamp,
            &rates,
            &mut assets,
            &mut base,
        )?
    };

    ctx.accounts.engine_state.set_inner(engine_cell.into_inner());
    if let Some(record) = ctx.accounts.depositor_record.as_mut() {
        record.set_inner(record_cell.into_inner());
    }

    msg!(
        "Claim settled: {} units delivered, {} lamports refunded",
        receipt.filled,
        receipt.refund
    );

    Ok(())
}

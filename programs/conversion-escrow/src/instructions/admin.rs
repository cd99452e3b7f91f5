use anchor_lang::prelude::*;
use anchor_spl::token_interface::TokenAccount;
use crate::constants::*;
use crate::engine;
use crate::state::*;

/// Update the per-deposit minimum
/// Only callable by an administrator
#[derive(Accounts)]
pub struct SetMinInvestment<'info> {
    pub administrator: Signer<'info>,

    #[account(
        mut,
        seeds = [ENGINE_STATE_SEED],
        bump = engine_state.bump
    )]
    pub engine_state: Account<'info, EngineState>,
}

pub fn set_min_investment_handler(ctx: Context<SetMinInvestment>, amount: u64) -> Result<()> {
    engine::treasury::set_min_investment(
        &mut ctx.accounts.engine_state,
        &ctx.accounts.administrator.key(),
        amount,
    )?;

    msg!("Minimum investment set to {} lamports", amount);

    Ok(())
}

/// Leave the Suspended state once the asset vault is resupplied
#[derive(Accounts)]
pub struct Resume<'info> {
    pub administrator: Signer<'info>,

    #[account(
        mut,
        seeds = [ENGINE_STATE_SEED],
        bump = engine_state.bump
    )]
    pub engine_state: Account<'info, EngineState>,

    #[account(
        seeds = [ASSET_VAULT_SEED],
        bump = engine_state.asset_vault_bump
    )]
    pub asset_vault: InterfaceAccount<'info, TokenAccount>,
}

pub fn resume_handler(ctx: Context<Resume>) -> Result<()> {
    let was_suspended = ctx.accounts.engine_state.suspended;
    let asset_balance = ctx.accounts.asset_vault.amount;

    engine::suspension::resume(
        &mut ctx.accounts.engine_state,
        &ctx.accounts.administrator.key(),
        asset_balance,
    )?;

    if was_suspended {
        msg!("Engine resumed with {} asset units in the vault", asset_balance);
    }

    Ok(())
}

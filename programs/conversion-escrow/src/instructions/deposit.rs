use anchor_lang::prelude::*;
use crate::constants::*;
use crate::engine;
use crate::state::*;

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut)]
    pub depositor: Signer<'info>,

    #[account(
        mut,
        seeds = [ENGINE_STATE_SEED],
        bump = engine_state.bump
    )]
    pub engine_state: Account<'info, EngineState>,

    /// Depositor record - initialized on first deposit
    #[account(
        init_if_needed,
        payer = depositor,
        space = DepositorRecord::LEN,
        seeds = [DEPOSITOR_RECORD_SEED, depositor.key().as_ref()],
        bump
    )]
    pub depositor_record: Account<'info, DepositorRecord>,

    /// CHECK: PDA that holds deposited lamports
    #[account(
        mut,
        seeds = [BASE_VAULT_SEED],
        bump = engine_state.base_vault_bump
    )]
    pub base_vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    let clock = Clock::get()?;
    let depositor = ctx.accounts.depositor.key();

    engine::ledger::record_deposit(
        &mut ctx.accounts.engine_state,
        &mut ctx.accounts.depositor_record,
        depositor,
        amount,
        clock.unix_timestamp,
    )?;
    ctx.accounts.depositor_record.bump = ctx.bumps.depositor_record;

    // Transfer SOL to vault
    if amount > 0 {
        anchor_lang::system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                anchor_lang::system_program::Transfer {
                    from: ctx.accounts.depositor.to_account_info(),
                    to: ctx.accounts.base_vault.to_account_info(),
                },
            ),
            amount,
        )?;
    }

    Ok(())
}

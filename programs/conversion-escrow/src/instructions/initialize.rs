use anchor_lang::prelude::*;
use anchor_lang::solana_program::rent::Rent;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::engine;
use crate::ledgers::RateFeed;
use crate::state::EngineState;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    /// `init_if_needed` so a repeated call reaches the `initialized` check
    #[account(
        init_if_needed,
        payer = payer,
        space = EngineState::LEN,
        seeds = [ENGINE_STATE_SEED],
        bump
    )]
    pub engine_state: Account<'info, EngineState>,

    /// CHECK: PDA that holds deposited lamports
    #[account(
        mut,
        seeds = [BASE_VAULT_SEED],
        bump
    )]
    pub base_vault: SystemAccount<'info>,

    #[account(
        init_if_needed,
        payer = payer,
        seeds = [ASSET_VAULT_SEED],
        bump,
        token::mint = asset_mint,
        token::authority = engine_state,
        token::token_program = token_program,
    )]
    pub asset_vault: InterfaceAccount<'info, TokenAccount>,

    pub asset_mint: InterfaceAccount<'info, Mint>,

    /// CHECK: Oracle rate feed - validated by decoding its layout
    pub rate_feed: UncheckedAccount<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<Initialize>,
    administrators: Vec<Pubkey>,
    min_investment: Option<u64>,
) -> Result<()> {
    let payer = ctx.accounts.payer.key();

    // Reject feeds we cannot read before pinning them
    RateFeed::load(&ctx.accounts.rate_feed.to_account_info())?;

    engine::lifecycle::initialize(
        &mut ctx.accounts.engine_state,
        payer,
        administrators,
        min_investment,
        ctx.accounts.asset_mint.key(),
        ctx.accounts.rate_feed.key(),
    )?;

    let engine_state = &mut ctx.accounts.engine_state;
    engine_state.bump = ctx.bumps.engine_state;
    engine_state.base_vault_bump = ctx.bumps.base_vault;
    engine_state.asset_vault_bump = ctx.bumps.asset_vault;

    // Fund the lamport vault up to its rent-exempt minimum
    let rent_reserve = Rent::get()?.minimum_balance(0);
    let shortfall = rent_reserve.saturating_sub(ctx.accounts.base_vault.lamports());
    if shortfall > 0 {
        anchor_lang::system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                anchor_lang::system_program::Transfer {
                    from: ctx.accounts.payer.to_account_info(),
                    to: ctx.accounts.base_vault.to_account_info(),
                },
            ),
            shortfall,
        )?;
    }

    msg!(
        "Engine initialized with {} administrator(s), min investment {} lamports",
        ctx.accounts.engine_state.administrators.len(),
        ctx.accounts.engine_state.min_investment
    );

    Ok(())
}

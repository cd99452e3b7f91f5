use anchor_lang::prelude::*;
use anchor_lang::solana_program::rent::Rent;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::engine;
use crate::errors::EscrowError;
use crate::ledgers::{AssetVault, BaseVault};
use crate::state::*;

/// Lamport withdrawal by an administrator
/// Shared by the bounded and the unbounded variant
#[derive(Accounts)]
pub struct WithdrawBase<'info> {
    pub administrator: Signer<'info>,

    #[account(
        seeds = [ENGINE_STATE_SEED],
        bump = engine_state.bump
    )]
    pub engine_state: Account<'info, EngineState>,

    /// CHECK: PDA that holds deposited lamports
    #[account(
        mut,
        seeds = [BASE_VAULT_SEED],
        bump = engine_state.base_vault_bump
    )]
    pub base_vault: SystemAccount<'info>,

    /// CHECK: Any system account chosen by the administrator
    #[account(mut)]
    pub recipient: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> WithdrawBase<'info> {
    fn vault_ledger(&self) -> Result<BaseVault<'_, 'info>> {
        Ok(BaseVault {
            vault: self.base_vault.to_account_info(),
            vault_bump: self.engine_state.base_vault_bump,
            destination: self.recipient.to_account_info(),
            system_program: self.system_program.to_account_info(),
            rent_reserve: Rent::get()?.minimum_balance(0),
            checkpoint: None,
        })
    }
}

pub fn withdraw_bounded_handler(ctx: Context<WithdrawBase>, amount: u64) -> Result<()> {
    let accounts = &ctx.accounts;
    let mut base = accounts.vault_ledger()?;

    engine::treasury::withdraw_bounded(
        &accounts.engine_state,
        &accounts.administrator.key(),
        &accounts.recipient.key(),
        amount,
        &mut base,
    )?;

    msg!("Withdrew {} lamports to {}", amount, accounts.recipient.key());

    Ok(())
}

pub fn withdraw_all_handler(ctx: Context<WithdrawBase>) -> Result<()> {
    let accounts = &ctx.accounts;
    let mut base = accounts.vault_ledger()?;

    let amount = engine::treasury::withdraw_all(
        &accounts.engine_state,
        &accounts.administrator.key(),
        &accounts.recipient.key(),
        &mut base,
    )?;

    msg!("Withdrew entire balance of {} lamports to {}", amount, accounts.recipient.key());

    Ok(())
}

/// Move the asset inventory to an administrator-chosen token account
#[derive(Accounts)]
pub struct SweepAssets<'info> {
    pub administrator: Signer<'info>,

    #[account(
        seeds = [ENGINE_STATE_SEED],
        bump = engine_state.bump
    )]
    pub engine_state: Account<'info, EngineState>,

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

    #[account(
        mut,
        token::mint = asset_mint,
    )]
    pub recipient_token_account: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
}

pub fn sweep_assets_handler(ctx: Context<SweepAssets>) -> Result<()> {
    let accounts = &ctx.accounts;
    let recipient = accounts.recipient_token_account.owner;

    let mut assets = AssetVault {
        vault: &accounts.asset_vault,
        mint: &accounts.asset_mint,
        destination: &accounts.recipient_token_account,
        authority: accounts.engine_state.to_account_info(),
        authority_bump: accounts.engine_state.bump,
        token_program: &accounts.token_program,
        checkpoint: None,
        sent: 0,
    };

    let amount = engine::treasury::sweep_assets(
        &accounts.engine_state,
        &accounts.administrator.key(),
        &recipient,
        &mut assets,
    )?;

    msg!("Swept {} asset units to {}", amount, recipient);

    Ok(())
}

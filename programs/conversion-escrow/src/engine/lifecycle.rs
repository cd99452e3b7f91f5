use anchor_lang::prelude::*;
use crate::constants::DEFAULT_MIN_INVESTMENT;
use crate::engine::access::normalize_administrators;
use crate::errors::EscrowError;
use crate::events::EngineInitialized;
use crate::state::EngineState;

/// One-time configuration of the engine state
///
/// The state account may outlive a program upgrade, so this runs as an
/// explicit instruction guarded by `initialized` rather than at creation.
pub fn initialize(
    state: &mut EngineState,
    caller: Pubkey,
    administrators: Vec<Pubkey>,
    min_investment: Option<u64>,
    asset_mint: Pubkey,
    rate_feed: Pubkey,
) -> Result<()> {
    require!(!state.initialized, EscrowError::AlreadyInitialized);

    state.administrators = normalize_administrators(caller, administrators)?;
    state.min_investment = min_investment.unwrap_or(DEFAULT_MIN_INVESTMENT);
    state.asset_mint = asset_mint;
    state.rate_feed = rate_feed;

    state.suspended = false;
    state.locked = false;
    state.total_pending = 0;
    state.total_deposited = 0;
    state.total_converted = 0;
    state.total_assets_delivered = 0;
    state.total_refunded = 0;
    state.initialized = true;

    emit!(EngineInitialized {
        administrators: state.administrators.clone(),
        asset_mint,
        rate_feed,
        min_investment: state.min_investment,
    });

    Ok(())
}

use anchor_lang::prelude::*;
use crate::errors::EscrowError;
use crate::events::EngineResumed;
use crate::state::EngineState;

/// Lift a suspension once the asset pool has been resupplied
///
/// Administrator-only. Calling it on an active engine runs the same checks
/// and leaves the engine active.
pub fn resume(state: &mut EngineState, caller: &Pubkey, asset_balance: u64) -> Result<()> {
    state.ensure_initialized()?;
    state.require_administrator(caller)?;
    require!(asset_balance > 0, EscrowError::ZeroAssetBalance);

    state.suspended = false;

    emit!(EngineResumed {
        administrator: *caller,
        asset_balance,
    });

    Ok(())
}

use anchor_lang::prelude::*;
use crate::errors::EscrowError;
use crate::events::DepositRecorded;
use crate::state::{DepositorRecord, EngineState};

/// Record `amount` lamports as pending for `depositor`
///
/// Every deposit resets `request_time`, so an accumulated balance always
/// waits for a rate newer than its latest top-up. The minimum applies to
/// each deposit on its own, not to the accumulated balance.
///
/// Validates everything before touching either account; the caller moves
/// the lamports into the base vault.
pub fn record_deposit(
    state: &mut EngineState,
    record: &mut DepositorRecord,
    depositor: Pubkey,
    amount: u64,
    now: i64,
) -> Result<()> {
    state.ensure_active()?;
    state.ensure_unlocked()?;
    require!(
        amount >= state.min_investment,
        EscrowError::BelowMinimumInvestment
    );

    let pending_amount = record.pending_amount
        .checked_add(amount)
        .ok_or(EscrowError::Overflow)?;
    let total_pending = state.total_pending
        .checked_add(amount)
        .ok_or(EscrowError::Overflow)?;
    let total_deposited = state.total_deposited
        .checked_add(amount)
        .ok_or(EscrowError::Overflow)?;

    record.depositor = depositor;
    record.pending_amount = pending_amount;
    record.request_time = now;

    state.total_pending = total_pending;
    state.total_deposited = total_deposited;

    emit!(DepositRecorded {
        depositor,
        amount,
        pending_amount,
        request_time: now,
    });

    Ok(())
}

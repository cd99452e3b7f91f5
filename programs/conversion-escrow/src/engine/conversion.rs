use std::cell::RefCell;

use anchor_lang::prelude::*;
use crate::engine::{rate_gate, AssetLedger, BaseLedger, Rate, RateSource, ReentrancyGuard};
use crate::errors::EscrowError;
use crate::events::{PurchaseCompleted, RefundIssued, SuspensionTriggered};
use crate::state::{DepositorRecord, EngineState};

/// How a pending amount is settled against the asset pool
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fill {
    /// Units the whole pending amount would buy
    pub requested: u64,
    /// Units actually delivered
    pub filled: u64,
    /// Lamports kept by the engine for `filled`
    pub cost: u64,
    /// Lamports returned to the depositor
    pub refund: u64,
}

impl Fill {
    /// Settle `pending` lamports at `rate` against `pool` units
    ///
    /// Short pool: deliver the whole pool, charge `floor(pool * den / num)`
    /// and refund the rest.
    pub fn compute(pending: u64, rate: Rate, pool: u64) -> Result<Self> {
        let requested = rate.units_for(pending)?;

        if requested <= pool {
            return Ok(Self {
                requested,
                filled: requested,
                cost: pending,
                refund: 0,
            });
        }

        let filled = pool;
        let cost = rate.cost_of(filled)?;
        let refund = pending
            .checked_sub(cost)
            .ok_or(EscrowError::Underflow)?;

        Ok(Self { requested, filled, cost, refund })
    }

    /// True when the pool could not cover the request
    pub fn exhausts_pool(&self) -> bool {
        self.requested > self.filled
    }
}

/// Result of a successful claim
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimReceipt {
    pub filled: u64,
    pub refund: u64,
    pub suspended: bool,
}

/// Convert `depositor`'s pending amount
///
/// Runs under [`ReentrancyGuard`]. Ledger effects are applied before the
/// outbound transfers and restored if either transfer fails, so a failed
/// claim leaves both accounts exactly as they were.
pub fn claim<R, A, B>(
    engine: &RefCell<EngineState>,
    record: &RefCell<DepositorRecord>,
    depositor: &Pubkey,
    now: i64,
    rates: &R,
    assets: &mut A,
    base: &mut B,
) -> Result<ClaimReceipt>
where
    R: RateSource,
    A: AssetLedger,
    B: BaseLedger,
{
    let _guard = ReentrancyGuard::acquire(engine)?;

    engine.borrow().ensure_active()?;
    let (pending, request_time) = {
        let record = record.borrow();
        require!(record.has_pending(), EscrowError::NoPendingBalance);
        (record.pending_amount, record.request_time)
    };
    require!(
        rate_gate::is_eligible(request_time, rates.last_update_time()?),
        EscrowError::RateNotUpdated
    );

    let rate = rates.current_rate()?;
    let pool = assets.balance()?;
    let fill = Fill::compute(pending, rate, pool)?;

    let engine_snapshot = engine.borrow().clone();
    let record_snapshot = record.borrow().clone();

    // Effects
    {
        let mut state = engine.borrow_mut();
        let total_pending = state.total_pending
            .checked_sub(pending)
            .ok_or(EscrowError::Underflow)?;
        let total_converted = state.total_converted
            .checked_add(fill.cost)
            .ok_or(EscrowError::Overflow)?;
        let total_assets_delivered = state.total_assets_delivered
            .checked_add(fill.filled)
            .ok_or(EscrowError::Overflow)?;
        let total_refunded = state.total_refunded
            .checked_add(fill.refund)
            .ok_or(EscrowError::Overflow)?;

        state.total_pending = total_pending;
        state.total_converted = total_converted;
        state.total_assets_delivered = total_assets_delivered;
        state.total_refunded = total_refunded;
        if fill.exhausts_pool() {
            state.suspended = true;
        }
    }
    record.borrow_mut().clear();

    // Interactions
    if let Err(err) = deliver(depositor, &fill, assets, base) {
        *engine.borrow_mut() = engine_snapshot;
        *record.borrow_mut() = record_snapshot;
        return Err(err);
    }

    emit!(PurchaseCompleted {
        depositor: *depositor,
        amount: fill.filled,
    });

    if fill.exhausts_pool() {
        emit!(RefundIssued {
            depositor: *depositor,
            amount: fill.refund,
        });
        emit!(SuspensionTriggered {
            triggered_by: *depositor,
            suspended_at: now,
        });
        msg!(
            "Asset pool exhausted: filled {} of {} units, refunded {} lamports",
            fill.filled,
            fill.requested,
            fill.refund
        );
    }

    Ok(ClaimReceipt {
        filled: fill.filled,
        refund: fill.refund,
        suspended: fill.exhausts_pool(),
    })
}

fn deliver<A, B>(depositor: &Pubkey, fill: &Fill, assets: &mut A, base: &mut B) -> Result<()>
where
    A: AssetLedger,
    B: BaseLedger,
{
    if fill.filled > 0 {
        assets.transfer(depositor, fill.filled).map_err(|err| {
            msg!("Asset transfer rejected: {}", err);
            error!(EscrowError::TransferFailed)
        })?;
    }

    if fill.refund > 0 {
        base.transfer(depositor, fill.refund).map_err(|err| {
            msg!("Refund rejected: {}", err);
            error!(EscrowError::RefundFailed)
        })?;
    }

    Ok(())
}

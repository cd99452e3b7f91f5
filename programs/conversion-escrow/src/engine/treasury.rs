use anchor_lang::prelude::*;
use crate::engine::{AssetLedger, BaseLedger};
use crate::errors::EscrowError;
use crate::events::{AssetsSwept, BaseWithdrawn, MinInvestmentUpdated};
use crate::state::EngineState;

/// Lamports not owed to any pending depositor
pub fn available_for_withdrawal(state: &EngineState, held: u64) -> u64 {
    held.saturating_sub(state.total_pending)
}

/// Withdraw base currency without touching pending liabilities
pub fn withdraw_bounded<B: BaseLedger>(
    state: &EngineState,
    caller: &Pubkey,
    to: &Pubkey,
    amount: u64,
    base: &mut B,
) -> Result<()> {
    state.ensure_initialized()?;
    state.require_administrator(caller)?;
    state.ensure_unlocked()?;

    let available = available_for_withdrawal(state, base.held()?);
    require!(amount <= available, EscrowError::ExceedsAvailable);

    if amount > 0 {
        base.transfer(to, amount)?;
    }

    emit!(BaseWithdrawn {
        administrator: *caller,
        recipient: *to,
        amount,
        bounded: true,
    });

    Ok(())
}

/// Withdraw the entire held base balance, pending liabilities included
///
/// UNSAFE for depositors: pending amounts stay recorded but are no longer
/// backed. Wind-down only.
pub fn withdraw_all<B: BaseLedger>(
    state: &EngineState,
    caller: &Pubkey,
    to: &Pubkey,
    base: &mut B,
) -> Result<u64> {
    state.ensure_initialized()?;
    state.require_administrator(caller)?;
    state.ensure_unlocked()?;

    let amount = base.held()?;
    if amount > 0 {
        base.transfer(to, amount)?;
    }

    if state.total_pending > 0 {
        msg!(
            "withdraw_all left {} pending lamports unbacked",
            state.total_pending
        );
    }

    emit!(BaseWithdrawn {
        administrator: *caller,
        recipient: *to,
        amount,
        bounded: false,
    });

    Ok(amount)
}

/// Move the whole asset inventory out of the engine
pub fn sweep_assets<A: AssetLedger>(
    state: &EngineState,
    caller: &Pubkey,
    to: &Pubkey,
    assets: &mut A,
) -> Result<u64> {
    state.ensure_initialized()?;
    state.require_administrator(caller)?;

    let amount = assets.balance()?;
    if amount > 0 {
        assets.transfer(to, amount)?;
    }

    emit!(AssetsSwept {
        administrator: *caller,
        recipient: *to,
        amount,
    });

    Ok(amount)
}

pub fn set_min_investment(state: &mut EngineState, caller: &Pubkey, amount: u64) -> Result<()> {
    state.ensure_initialized()?;
    state.require_administrator(caller)?;

    let old_min_investment = state.min_investment;
    state.min_investment = amount;

    emit!(MinInvestmentUpdated {
        old_min_investment,
        new_min_investment: amount,
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::testing::{escrow_error, Harness};

    fn funded() -> (Harness, Pubkey) {
        let mut h = Harness::new(1, 1_000_000);
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();

        // bob converts 30, alice keeps 70 pending
        h.deposit(bob, 30).unwrap();
        h.publish_rate(100_000, 1_000);
        h.claim(bob).unwrap();
        h.deposit(alice, 70).unwrap();
        (h, alice)
    }

    #[test]
    fn available_excludes_pending() {
        let (h, _) = funded();
        assert_eq!(h.base.held, 100);
        assert_eq!(available_for_withdrawal(&h.engine(), h.base.held), 30);
    }

    #[test]
    fn bounded_withdrawal_boundaries() {
        let (mut h, _) = funded();
        let admin = h.admin;
        let treasury = Pubkey::new_unique();
        let state = h.engine();

        let err = withdraw_bounded(&state, &admin, &treasury, 31, &mut h.base).unwrap_err();
        assert_eq!(err, escrow_error(EscrowError::ExceedsAvailable));
        assert_eq!(h.base.held, 100);

        withdraw_bounded(&state, &admin, &treasury, 30, &mut h.base).unwrap();
        assert_eq!(h.base.paid_to(&treasury), 30);
        assert_eq!(h.base.held, 70);
        assert!(h.base.held >= state.total_pending);

        let err = withdraw_bounded(&state, &admin, &treasury, 1, &mut h.base).unwrap_err();
        assert_eq!(err, escrow_error(EscrowError::ExceedsAvailable));
    }

    #[test]
    fn bounded_withdrawal_never_dips_into_pending() {
        let (mut h, _) = funded();
        let admin = h.admin;
        let state = h.engine();

        for amount in 0..=120u64 {
            let before = h.base.held;
            let result = withdraw_bounded(&state, &admin, &Pubkey::new_unique(), amount, &mut h.base);
            if amount <= before - state.total_pending {
                assert!(result.is_ok());
            } else {
                assert_eq!(result.unwrap_err(), escrow_error(EscrowError::ExceedsAvailable));
            }
            assert!(h.base.held >= state.total_pending);
        }
    }

    #[test]
    fn withdrawals_require_administrator() {
        let (mut h, _) = funded();
        let state = h.engine();
        let outsider = Pubkey::new_unique();

        assert_eq!(
            withdraw_bounded(&state, &outsider, &outsider, 1, &mut h.base).unwrap_err(),
            escrow_error(EscrowError::NotAuthorized)
        );
        assert_eq!(
            withdraw_all(&state, &outsider, &outsider, &mut h.base).unwrap_err(),
            escrow_error(EscrowError::NotAuthorized)
        );
        assert_eq!(
            sweep_assets(&state, &outsider, &outsider, &mut h.assets).unwrap_err(),
            escrow_error(EscrowError::NotAuthorized)
        );
        assert_eq!(h.base.held, 100);
    }

    #[test]
    fn withdrawals_wait_for_a_running_claim() {
        let (mut h, _) = funded();
        let admin = h.admin;
        let mut state = h.engine();
        state.locked = true;

        assert_eq!(
            withdraw_bounded(&state, &admin, &admin, 1, &mut h.base).unwrap_err(),
            escrow_error(EscrowError::ReentrantCall)
        );
        assert_eq!(
            withdraw_all(&state, &admin, &admin, &mut h.base).unwrap_err(),
            escrow_error(EscrowError::ReentrantCall)
        );
        assert_eq!(h.base.held, 100);
    }

    #[test]
    fn withdraw_all_ignores_liabilities() {
        let (mut h, alice) = funded();
        let admin = h.admin;
        let treasury = Pubkey::new_unique();
        let state = h.engine();

        assert_eq!(withdraw_all(&state, &admin, &treasury, &mut h.base).unwrap(), 100);
        assert_eq!(h.base.held, 0);
        assert_eq!(h.record(&alice).pending_amount, 70);
    }

    #[test]
    fn sweep_moves_entire_inventory() {
        let (mut h, _) = funded();
        let admin = h.admin;
        let treasury = Pubkey::new_unique();
        let state = h.engine();
        let inventory = h.assets.balance;

        assert_eq!(sweep_assets(&state, &admin, &treasury, &mut h.assets).unwrap(), inventory);
        assert_eq!(h.assets.balance, 0);
        assert_eq!(h.assets.delivered_to(&treasury), inventory);
    }

    #[test]
    fn min_investment_setter_is_administrator_only() {
        let h = Harness::new(1, 0);
        let admin = h.admin;

        assert_eq!(
            set_min_investment(&mut h.engine_mut(), &Pubkey::new_unique(), 5).unwrap_err(),
            escrow_error(EscrowError::NotAuthorized)
        );
        set_min_investment(&mut h.engine_mut(), &admin, 5).unwrap();
        assert_eq!(h.engine().min_investment, 5);
    }
}

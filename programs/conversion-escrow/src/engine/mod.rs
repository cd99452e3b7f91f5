//! Conversion engine core
//!
//! Plain functions over [`EngineState`](crate::state::EngineState) and
//! [`DepositorRecord`](crate::state::DepositorRecord). Everything outside the
//! program's own accounts is reached through the capability traits below, so
//! instruction handlers plug in CPI-backed ledgers and tests plug in fakes.
//!
//! ## Modules
//!
//! - **lifecycle**: one-time initialization
//! - **access**: administrator set normalization
//! - **ledger**: deposit recording
//! - **rate_gate**: rate freshness check
//! - **conversion**: fill computation and the claim algorithm
//! - **guard**: reentrancy lock
//! - **suspension**: Active / Suspended transitions
//! - **treasury**: withdrawal bounds, sweeps and the minimum investment

pub mod access;
pub mod conversion;
pub mod guard;
pub mod ledger;
pub mod lifecycle;
pub mod rate_gate;
pub mod suspension;
pub mod treasury;

#[cfg(test)]
pub(crate) mod testing;

pub use conversion::{ClaimReceipt, Fill};
pub use guard::ReentrancyGuard;

use anchor_lang::prelude::*;
use crate::errors::EscrowError;

/// Conversion rate: `numerator` asset units per `denominator` lamports
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rate {
    pub numerator: u64,
    pub denominator: u64,
}

impl Rate {
    pub fn new(numerator: u64, denominator: u64) -> Result<Self> {
        require!(
            numerator > 0 && denominator > 0,
            EscrowError::InvalidRate
        );
        Ok(Self { numerator, denominator })
    }

    /// Asset units bought by `amount` lamports, rounded down
    pub fn units_for(&self, amount: u64) -> Result<u64> {
        let units = (amount as u128)
            .checked_mul(self.numerator as u128)
            .ok_or(EscrowError::Overflow)?
            / self.denominator as u128;
        u64::try_from(units).map_err(|_| error!(EscrowError::Overflow))
    }

    /// Lamports charged for `units` asset units, rounded down
    pub fn cost_of(&self, units: u64) -> Result<u64> {
        let cost = (units as u128)
            .checked_mul(self.denominator as u128)
            .ok_or(EscrowError::Overflow)?
            / self.numerator as u128;
        u64::try_from(cost).map_err(|_| error!(EscrowError::Overflow))
    }
}

/// Source of the conversion rate
pub trait RateSource {
    fn current_rate(&self) -> Result<Rate>;

    /// Unix timestamp of the last rate publication
    fn last_update_time(&self) -> Result<i64>;
}

/// Ledger of the target asset held by the engine
pub trait AssetLedger {
    fn balance(&self) -> Result<u64>;

    fn transfer(&mut self, to: &Pubkey, amount: u64) -> Result<()>;
}

/// Ledger of the base currency held by the engine
pub trait BaseLedger {
    /// Lamports the engine can pay out
    fn held(&self) -> Result<u64>;

    fn transfer(&mut self, to: &Pubkey, amount: u64) -> Result<()>;
}

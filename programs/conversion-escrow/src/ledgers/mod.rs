//! On-chain implementations of the engine's capability traits
//!
//! - **rate_feed**: oracle account layout, read as a [`RateSource`](crate::engine::RateSource)
//! - **asset_vault**: token CPI over the engine's asset vault
//! - **base_vault**: system CPI over the lamport vault

pub mod asset_vault;
pub mod base_vault;
pub mod rate_feed;

pub use asset_vault::*;
pub use base_vault::*;
pub use rate_feed::*;

use std::cell::RefCell;

use anchor_lang::prelude::*;
use crate::errors::EscrowError;
use crate::state::EngineState;

/// Writes the in-flight engine state through to its account
///
/// Flushed before every CPI a claim makes, so a nested invocation of this
/// program reads `locked == true` from account data.
pub struct Checkpoint<'a, 'info> {
    pub info: AccountInfo<'info>,
    pub state: &'a RefCell<EngineState>,
}

impl<'a, 'info> Checkpoint<'a, 'info> {
    pub fn flush(&self) -> Result<()> {
        let state = self
            .state
            .try_borrow()
            .map_err(|_| error!(EscrowError::ReentrantCall))?;
        let mut data = self.info.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data[..];
        state.try_serialize(&mut writer)?;
        Ok(())
    }
}

use std::cell::RefCell;

use anchor_lang::prelude::*;
use crate::errors::EscrowError;
use crate::state::EngineState;

/// Call-scoped lock over `EngineState::locked`
///
/// The state sits in a `RefCell` the same way account data does, so a nested
/// invocation made from inside an outbound transfer sees the lock. The lock
/// is released when the guard drops, on success and on error alike.
pub struct ReentrancyGuard<'a> {
    state: &'a RefCell<EngineState>,
}

impl<'a> ReentrancyGuard<'a> {
    pub fn acquire(state: &'a RefCell<EngineState>) -> Result<Self> {
        let mut engine = state
            .try_borrow_mut()
            .map_err(|_| error!(EscrowError::ReentrantCall))?;
        require!(!engine.locked, EscrowError::ReentrantCall);
        engine.locked = true;

        Ok(Self { state })
    }
}

impl Drop for ReentrancyGuard<'_> {
    fn drop(&mut self) {
        if let Ok(mut engine) = self.state.try_borrow_mut() {
            engine.locked = false;
        }
    }
}

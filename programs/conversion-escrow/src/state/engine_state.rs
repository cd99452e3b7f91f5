use anchor_lang::prelude::*;
use crate::constants::MAX_ADMINISTRATORS;
use crate::errors::EscrowError;

/// Engine-wide configuration, liabilities and lifecycle flags
/// Single PDA; also the authority of the asset vault
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct EngineState {
    /// Set by the first successful `initialize`
    pub initialized: bool,

    /// Keys allowed to call administrator instructions
    pub administrators: Vec<Pubkey>,

    // ============================================================
    // CONFIGURATION
    // ============================================================

    /// Minimum lamports accepted per deposit
    pub min_investment: u64,

    /// Target asset mint
    pub asset_mint: Pubkey,

    /// Oracle account publishing the conversion rate
    pub rate_feed: Pubkey,

    // ============================================================
    // LIFECYCLE
    // ============================================================

    /// Set when a claim exhausts the asset pool
    pub suspended: bool,

    /// Reentrancy lock, held only while a claim is running
    pub locked: bool,

    // ============================================================
    // ACCOUNTING
    // ============================================================

    /// Sum of every depositor's pending amount
    pub total_pending: u64,

    /// Lifetime lamports deposited
    pub total_deposited: u64,

    /// Lifetime lamports converted (kept by the engine as proceeds)
    pub total_converted: u64,

    /// Lifetime asset units delivered to depositors
    pub total_assets_delivered: u64,

    /// Lifetime lamports refunded on partial fills
    pub total_refunded: u64,

    // ============================================================
    // BUMPS
    // ============================================================

    pub bump: u8,
    pub base_vault_bump: u8,
    pub asset_vault_bump: u8,
}

impl EngineState {
    pub const LEN: usize = 8  // discriminator
        + 1   // initialized
        + 4 + 32 * MAX_ADMINISTRATORS  // administrators
        + 8   // min_investment
        + 32  // asset_mint
        + 32  // rate_feed
        + 1   // suspended
        + 1   // locked
        + 8   // total_pending
        + 8   // total_deposited
        + 8   // total_converted
        + 8   // total_assets_delivered
        + 8   // total_refunded
        + 3   // bumps
        + 64; // padding for future expansion

    pub fn is_administrator(&self, key: &Pubkey) -> bool {
        self.administrators.contains(key)
    }

    pub fn require_administrator(&self, key: &Pubkey) -> Result<()> {
        require!(self.is_administrator(key), EscrowError::NotAuthorized);
        Ok(())
    }

    pub fn ensure_initialized(&self) -> Result<()> {
        require!(self.initialized, EscrowError::NotInitialized);
        Ok(())
    }

    /// Deposits and claims only run on an initialized, active engine
    pub fn ensure_active(&self) -> Result<()> {
        self.ensure_initialized()?;
        require!(!self.suspended, EscrowError::EngineSuspended);
        Ok(())
    }

    /// Fails while a claim holds the lock
    pub fn ensure_unlocked(&self) -> Result<()> {
        require!(!self.locked, EscrowError::ReentrantCall);
        Ok(())
    }
}

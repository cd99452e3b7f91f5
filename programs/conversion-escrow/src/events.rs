use anchor_lang::prelude::*;

// ============================================================
// LIFECYCLE EVENTS
// ============================================================

#[event]
pub struct EngineInitialized {
    pub administrators: Vec<Pubkey>,
    pub asset_mint: Pubkey,
    pub rate_feed: Pubkey,
    pub min_investment: u64,
}

#[event]
pub struct SuspensionTriggered {
    pub triggered_by: Pubkey,
    pub suspended_at: i64,
}

#[event]
pub struct EngineResumed {
    pub administrator: Pubkey,
    pub asset_balance: u64,
}

// ============================================================
// DEPOSIT EVENTS
// ============================================================

#[event]
pub struct DepositRecorded {
    pub depositor: Pubkey,
    pub amount: u64,
    pub pending_amount: u64,
    pub request_time: i64,
}

// ============================================================
// CONVERSION EVENTS
// ============================================================

#[event]
pub struct PurchaseCompleted {
    pub depositor: Pubkey,
    pub amount: u64,
}

#[event]
pub struct RefundIssued {
    pub depositor: Pubkey,
    pub amount: u64,
}

// ============================================================
// ADMIN EVENTS
// ============================================================

#[event]
pub struct MinInvestmentUpdated {
    pub old_min_investment: u64,
    pub new_min_investment: u64,
}

#[event]
pub struct BaseWithdrawn {
    pub administrator: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
    pub bounded: bool,
}

#[event]
pub struct AssetsSwept {
    pub administrator: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
}

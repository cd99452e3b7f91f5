// ============================================================
// LAMPORTS
// ============================================================

/// SOL per lamport (1 SOL = 1_000_000_000 lamports)
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// 0.1 SOL in lamports
pub const POINT_ONE_SOL: u64 = 100_000_000;

// ============================================================
// ENGINE DEFAULTS
// ============================================================

/// Minimum single deposit used when `initialize` is called without one (0.1 SOL)
pub const DEFAULT_MIN_INVESTMENT: u64 = POINT_ONE_SOL;

/// Upper bound on the administrator set (sizes the engine state account)
pub const MAX_ADMINISTRATORS: usize = 10;

// ============================================================
// RATE FEED
// ============================================================

/// Leading bytes of a rate feed account
pub const RATE_FEED_DISCRIMINATOR: [u8; 8] = *b"ratefeed";

// ============================================================
// PDA SEEDS
// ============================================================

pub const ENGINE_STATE_SEED: &[u8] = b"engine_state";
pub const DEPOSITOR_RECORD_SEED: &[u8] = b"depositor";
pub const BASE_VAULT_SEED: &[u8] = b"base_vault";
pub const ASSET_VAULT_SEED: &[u8] = b"asset_vault";

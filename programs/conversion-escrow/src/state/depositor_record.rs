use anchor_lang::prelude::*;

/// A depositor's unconverted contribution
/// One DepositorRecord per depositor; reused after it has been cleared
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct DepositorRecord {
    /// The depositor's wallet address
    pub depositor: Pubkey,

    /// Lamports waiting for conversion
    pub pending_amount: u64,

    /// Timestamp of the most recent deposit
    /// A claim needs a rate published strictly after this
    pub request_time: i64,

    /// PDA bump seed
    pub bump: u8,
}

impl DepositorRecord {
    pub const LEN: usize = 8  // discriminator
        + 32  // depositor
        + 8   // pending_amount
        + 8   // request_time
        + 1   // bump
        + 16; // padding

    /// A depositor without a record account reads as an empty record
    pub fn or_empty(record: Option<&Self>) -> Self {
        record.cloned().unwrap_or_default()
    }

    pub fn has_pending(&self) -> bool {
        self.pending_amount > 0
    }

    /// Reset after full conversion or refund
    pub fn clear(&mut self) {
        self.pending_amount = 0;
        self.request_time = 0;
    }
}

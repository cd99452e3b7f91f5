use anchor_lang::prelude::*;
use crate::constants::RATE_FEED_DISCRIMINATOR;
use crate::engine::{Rate, RateSource};
use crate::errors::EscrowError;

/// Rate feed account published by the oracle program
///
/// | Offset | Field | Type |
/// |--------|-------|------|
/// | 0 | discriminator (`b"ratefeed"`) | [u8; 8] |
/// | 8 | numerator | u64 LE |
/// | 16 | denominator | u64 LE |
/// | 24 | last_update_time | i64 LE |
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateFeed {
    /// Asset units per `denominator` lamports
    pub numerator: u64,
    pub denominator: u64,
    /// Unix timestamp of the last publication
    pub last_update_time: i64,
}

impl RateFeed {
    pub const LEN: usize = 8 + 8 + 8 + 8;

    pub fn try_deserialize(data: &[u8]) -> Result<Self> {
        if data.len() < Self::LEN {
            return Err(error!(EscrowError::InvalidAccountData));
        }
        if data[0..8] != RATE_FEED_DISCRIMINATOR {
            return Err(error!(EscrowError::InvalidAccountData));
        }

        Ok(Self {
            numerator: u64::from_le_bytes(read_word(data, 8)?),
            denominator: u64::from_le_bytes(read_word(data, 16)?),
            last_update_time: i64::from_le_bytes(read_word(data, 24)?),
        })
    }

    pub fn load(info: &AccountInfo) -> Result<Self> {
        let data = info.try_borrow_data()?;
        Self::try_deserialize(&data)
    }
}

fn read_word(data: &[u8], offset: usize) -> Result<[u8; 8]> {
    data.get(offset..offset + 8)
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or_else(|| error!(EscrowError::InvalidAccountData))
}

impl RateSource for RateFeed {
    fn current_rate(&self) -> Result<Rate> {
        Rate::new(self.numerator, self.denominator)
    }

    fn last_update_time(&self) -> Result<i64> {
        Ok(self.last_update_time)
    }
}

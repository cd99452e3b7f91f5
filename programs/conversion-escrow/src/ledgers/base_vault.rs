use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};
use crate::constants::BASE_VAULT_SEED;
use crate::engine::BaseLedger;
use crate::errors::EscrowError;
use crate::ledgers::Checkpoint;

/// Lamport vault PDA paying into one destination
///
/// The vault keeps its rent-exempt minimum; only the lamports above it count
/// as held.
pub struct BaseVault<'a, 'info> {
    pub vault: AccountInfo<'info>,
    pub vault_bump: u8,
    pub destination: AccountInfo<'info>,
    pub system_program: AccountInfo<'info>,
    pub rent_reserve: u64,
    pub checkpoint: Option<Checkpoint<'a, 'info>>,
}

impl<'a, 'info> BaseLedger for BaseVault<'a, 'info> {
    fn held(&self) -> Result<u64> {
        Ok(self.vault.lamports().saturating_sub(self.rent_reserve))
    }

    fn transfer(&mut self, to: &Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(*to, self.destination.key(), EscrowError::InvalidRecipient);
        require!(self.held()? >= amount, EscrowError::ExceedsAvailable);

        if let Some(checkpoint) = &self.checkpoint {
            checkpoint.flush()?;
        }

        let bump = [self.vault_bump];
        let seeds: &[&[u8]] = &[BASE_VAULT_SEED, &bump];

        system_program::transfer(
            CpiContext::new_with_signer(
                self.system_program.clone(),
                Transfer {
                    from: self.vault.clone(),
                    to: self.destination.clone(),
                },
                &[seeds],
            ),
            amount,
        )
    }
}

use anchor_lang::prelude::*;
use anchor_spl::token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked};
use crate::constants::ENGINE_STATE_SEED;
use crate::engine::AssetLedger;
use crate::errors::EscrowError;
use crate::ledgers::Checkpoint;

/// Asset vault owned by the engine state PDA, paying into one destination
///
/// `to` is checked against the destination token account's owner.
pub struct AssetVault<'a, 'info> {
    pub vault: &'a InterfaceAccount<'info, TokenAccount>,
    pub mint: &'a InterfaceAccount<'info, Mint>,
    pub destination: &'a InterfaceAccount<'info, TokenAccount>,
    /// Engine state PDA, the vault authority
    pub authority: AccountInfo<'info>,
    pub authority_bump: u8,
    pub token_program: &'a Interface<'info, TokenInterface>,
    pub checkpoint: Option<Checkpoint<'a, 'info>>,
    /// Units sent during this instruction (the vault account is not reloaded)
    pub sent: u64,
}

impl<'a, 'info> AssetLedger for AssetVault<'a, 'info> {
    fn balance(&self) -> Result<u64> {
        self.vault.amount
            .checked_sub(self.sent)
            .ok_or_else(|| error!(EscrowError::Underflow))
    }

    fn transfer(&mut self, to: &Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(*to, self.destination.owner, EscrowError::InvalidRecipient);

        if let Some(checkpoint) = &self.checkpoint {
            checkpoint.flush()?;
        }

        let bump = [self.authority_bump];
        let seeds: &[&[u8]] = &[ENGINE_STATE_SEED, &bump];

        token_interface::transfer_checked(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                TransferChecked {
                    from: self.vault.to_account_info(),
                    mint: self.mint.to_account_info(),
                    to: self.destination.to_account_info(),
                    authority: self.authority.clone(),
                },
                &[seeds],
            ),
            amount,
            self.mint.decimals,
        )?;

        self.sent = self.sent
            .checked_add(amount)
            .ok_or(EscrowError::Overflow)?;

        Ok(())
    }
}

use anchor_lang::prelude::*;
use crate::constants::MAX_ADMINISTRATORS;
use crate::errors::EscrowError;

/// Build the administrator set from an initialization request
///
/// An empty request makes `caller` the only administrator. Duplicates keep
/// their first position.
pub fn normalize_administrators(caller: Pubkey, requested: Vec<Pubkey>) -> Result<Vec<Pubkey>> {
    if requested.is_empty() {
        return Ok(vec![caller]);
    }

    let mut administrators: Vec<Pubkey> = Vec::with_capacity(requested.len());
    for key in requested {
        if !administrators.contains(&key) {
            administrators.push(key);
        }
    }

    require!(
        administrators.len() <= MAX_ADMINISTRATORS,
        EscrowError::TooManyAdministrators
    );

    Ok(administrators)
}

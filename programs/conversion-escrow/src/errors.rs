use anchor_lang::prelude::*;

#[error_code]
pub enum EscrowError {
    // ============================================================
    // LIFECYCLE ERRORS (6000-6009)
    // ============================================================

    #[msg("Engine has already been initialized")]
    AlreadyInitialized,

    #[msg("Engine has not been initialized")]
    NotInitialized,

    #[msg("Engine is suspended")]
    EngineSuspended,

    #[msg("Asset vault is empty - cannot resume")]
    ZeroAssetBalance,

    // ============================================================
    // DEPOSIT ERRORS (6010-6019)
    // ============================================================

    #[msg("Deposit received below minimum investment")]
    BelowMinimumInvestment,

    // ============================================================
    // CONVERSION ERRORS (6020-6039)
    // ============================================================

    #[msg("Depositor has no pending balance for conversion")]
    NoPendingBalance,

    #[msg("Rate has not been updated since the last deposit")]
    RateNotUpdated,

    #[msg("Rate feed reported a zero numerator or denominator")]
    InvalidRate,

    #[msg("Asset transfer to depositor failed")]
    TransferFailed,

    #[msg("Refund transfer to depositor failed")]
    RefundFailed,

    #[msg("Reentrant call rejected")]
    ReentrantCall,

    // ============================================================
    // ACCESS CONTROL ERRORS (6040-6049)
    // ============================================================

    #[msg("Caller is not an administrator")]
    NotAuthorized,

    #[msg("Too many administrators")]
    TooManyAdministrators,

    // ============================================================
    // TREASURY ERRORS (6050-6059)
    // ============================================================

    #[msg("Amount greater than available balance")]
    ExceedsAvailable,

    #[msg("Recipient does not match the transfer destination")]
    InvalidRecipient,

    // ============================================================
    // VALIDATION ERRORS (6060-6069)
    // ============================================================

    #[msg("Invalid account data or discriminator mismatch")]
    InvalidAccountData,

    // ============================================================
    // ARITHMETIC ERRORS (6070-6079)
    // ============================================================

    #[msg("Arithmetic overflow")]
    Overflow,

    #[msg("Arithmetic underflow")]
    Underflow,
}

use super::*;

#[error_code]
pub enum LedgerError {
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Please enter a valid amount greater than zero")]
    InvalidAmount,
    #[msg("Amount is below the configured minimum")]
    AmountBelowMinimum,
    #[msg("Yield rate must not exceed 10000 basis points")]
    InvalidYieldRate,
    #[msg("The null principal is not a valid party")]
    InvalidPrincipal,
    #[msg("Rebase interval must be greater than zero")]
    InvalidRebaseInterval,
    #[msg("Exactly one of the preview inputs must be set")]
    InvalidPreviewInput,
    #[msg("Sender and recipient must differ")]
    SelfTransfer,
    #[msg("Too many role grants")]
    TooManyGrants,
    #[msg("Unknown capability bits")]
    InvalidCapability,
    #[msg("Sender is blacklisted")]
    SenderBlacklisted,
    #[msg("Recipient is blacklisted")]
    RecipientBlacklisted,
    #[msg("Sender is not whitelisted")]
    SenderNotWhitelisted,
    #[msg("Recipient is not whitelisted")]
    RecipientNotWhitelisted,
    #[msg("Insufficient balance")]
    InsufficientBalance,
    #[msg("Ledger is paused")]
    Paused,
    #[msg("Math Overflow Error")]
    MathOverflow,
    #[msg("Math Underflow Error")]
    MathUnderflow,
    #[msg("Division by zero")]
    DivisionByZero,
    #[msg("Price must be greater than zero")]
    InvalidPrice,
    #[msg("Operation does not apply to this ledger strategy")]
    StrategyMismatch,
    #[msg("No price feed registered for this ledger")]
    PriceFeedNotFound,
    #[msg("The price oracle has no free feed slots")]
    PriceOracleFull,
    #[msg("Holder account does not belong to this ledger")]
    InvalidHolder,
}

/// Coarse classification callers use to decide what to do with a failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Unauthorized,
    InvalidArgument,
    ComplianceViolation,
    InsufficientBalance,
    Paused,
    Arithmetic,
    Configuration,
}

impl LedgerError {
    pub fn kind(&self) -> ErrorKind {
        use LedgerError::*;

        match self {
            Unauthorized => ErrorKind::Unauthorized,
            InvalidAmount
            | AmountBelowMinimum
            | InvalidYieldRate
            | InvalidPrincipal
            | InvalidRebaseInterval
            | InvalidPreviewInput
            | SelfTransfer
            | TooManyGrants
            | InvalidCapability => ErrorKind::InvalidArgument,
            SenderBlacklisted
            | RecipientBlacklisted
            | SenderNotWhitelisted
            | RecipientNotWhitelisted => ErrorKind::ComplianceViolation,
            InsufficientBalance => ErrorKind::InsufficientBalance,
            Paused => ErrorKind::Paused,
            MathOverflow | MathUnderflow | DivisionByZero | InvalidPrice => ErrorKind::Arithmetic,
            StrategyMismatch | PriceFeedNotFound | PriceOracleFull | InvalidHolder => {
                ErrorKind::Configuration
            }
        }
    }

    /// `true` when retrying with different input can succeed.
    pub fn is_retryable_with_new_input(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::InvalidArgument | ErrorKind::InsufficientBalance
        )
    }
}

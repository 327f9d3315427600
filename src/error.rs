use thiserror::Error;

/// Errors raised by [`Account`](crate::Account) operations.
///
/// Both kinds are detected before any state change, so an account that
/// returned an error is exactly as it was before the call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AccountError {
    /// A malformed email, or an amount that is not positive, not finite,
    /// or has more than two decimal places.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Insufficient funds: balance {balance}, required {required}")]
    InsufficientFunds { balance: f64, required: f64 },
}

impl AccountError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, Self::InsufficientFunds { .. })
    }
}

use thiserror::Error;

/// **An application-specific error type**
///
/// None of the variants is fatal. Whenever one is returned,
/// the account involved has been left exactly as it was.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum AccountingError {
    /// A deposit with a negative amount
    #[error("Invalid deposit amount: {0}. Deposit not applied.")]
    InvalidAmount(i64),

    /// A withdrawal larger than the available balance; carries the requested amount
    #[error("Insufficient funds for withdrawal of {0}.")]
    InsufficientFunds(i64),

    /// The resulting balance can't be represented
    #[error("Applying {0} would overflow the balance.")]
    AccountOverFunded(i64),

    #[error("Transaction \"{0}\" doesn't exist.")]
    TxNotFound(String),

    /// Only withdrawals can be reversed.
    #[error("Transaction \"{0}\" is not reversible.")]
    NotReversible(String),

    #[error("Transaction \"{0}\" has already been reversed.")]
    AlreadyReversed(String),

    #[error("Transaction \"{0}\" has already been applied.")]
    DuplicateTransaction(String),
}

pub const TX_ID_NOT_VALID_MSG: &str = "[ERROR] Transaction ID is not valid";
pub const EMPTY_TX_ID_MSG: &str = "Transaction ID cannot be empty.";

#[cfg(test)]
mod tests {
    use super::AccountingError;

    #[test]
    fn insufficient_funds_message_carries_amount() {
        assert_eq!(
            "Insufficient funds for withdrawal of 600.",
            AccountingError::InsufficientFunds(600).to_string()
        );
    }

    #[test]
    fn invalid_amount_message_carries_amount() {
        assert_eq!(
            "Invalid deposit amount: -50. Deposit not applied.",
            AccountingError::InvalidAmount(-50).to_string()
        );
    }
}

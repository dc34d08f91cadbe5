use crate::errors::EMPTY_TX_ID_MSG;
use rust_decimal::Decimal;

/// **Checks whether a deposit amount can be applied**
///
/// Zero is allowed, negative amounts aren't.
pub fn is_valid_deposit_amount(amount: i64) -> bool {
    amount >= 0
}

/// **Checks whether the `balance` covers a withdrawal of `amount`**
pub fn has_sufficient_funds(balance: Decimal, amount: i64) -> bool {
    balance >= Decimal::from(amount)
}

/// **Basic input validation for a transaction ID**
///
/// Checks for:
/// - An empty string.
///
/// Returns `None` if the ID is acceptable, or an explanation otherwise.
pub fn is_valid_tx_id(id: &str) -> Option<&'static str> {
    if id.trim().is_empty() {
        Some(EMPTY_TX_ID_MSG)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn zero_deposit_is_valid() {
        assert!(is_valid_deposit_amount(0));
        assert!(is_valid_deposit_amount(200));
    }

    #[test]
    fn negative_deposit_is_invalid() {
        assert!(!is_valid_deposit_amount(-1));
        assert!(!is_valid_deposit_amount(i64::MIN));
    }

    #[test]
    fn funds_are_sufficient_up_to_the_balance() {
        assert!(has_sufficient_funds(dec!(100), 100));
        assert!(has_sufficient_funds(dec!(100.5), 100));
        assert!(!has_sufficient_funds(dec!(99.99), 100));
        assert!(!has_sufficient_funds(dec!(-1), 0));
    }

    #[test]
    fn empty_tx_id_fails() {
        assert_eq!(Some(EMPTY_TX_ID_MSG), is_valid_tx_id(""));
        assert_eq!(Some(EMPTY_TX_ID_MSG), is_valid_tx_id("   "));
        assert_eq!(None, is_valid_tx_id("20240101000000-abc"));
    }
}

use rust_decimal::Decimal;

/// **A passive holder of a balance**
///
/// The account performs no validation of its own.
/// All policy lives in the transactions that are applied to it,
/// see [`crate::tx::Transaction::apply`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Account {
    balance: Decimal,
}

impl Account {
    /// Returns an account holding the `opening_balance`
    pub fn new(opening_balance: Decimal) -> Self {
        Account {
            balance: opening_balance,
        }
    }

    /// Retrieves the current balance
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Replaces the balance; no checks are made here.
    pub fn set_balance(&mut self, balance: Decimal) {
        self.balance = balance;
    }
}

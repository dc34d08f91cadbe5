use crate::account::Account;
use crate::errors::AccountingError;
use crate::tx::{Deposit, Transaction, Tx, TxId, Withdrawal};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeSet;

/// Owns an account, applies transactions to it, and keeps a record of them.
///
/// The transaction log is append-only and holds only transactions that were applied successfully.
/// Reversals don't rewrite the log; the reversed withdrawals' IDs are kept aside.
#[derive(Debug, Default)]
pub struct Teller {
    account: Account,
    tx_log: Vec<Tx>,
    reversed: BTreeSet<TxId>,
}

/// **A point-in-time view of a [`Teller`]**, ready to be serialized
#[derive(Debug, Serialize)]
pub struct Statement<'a> {
    pub balance: Decimal,
    pub transactions: &'a [Tx],
    pub reversed: Vec<&'a TxId>,
}

impl Teller {
    /// **Creates a new instance with an empty log.**
    pub fn new(opening_balance: Decimal) -> Self {
        Teller {
            account: Account::new(opening_balance),
            ..Default::default()
        }
    }

    /// **Retrieves the balance of the account**
    pub fn balance(&self) -> Decimal {
        self.account.balance()
    }

    /// **All successfully applied transactions, oldest first**
    pub fn tx_log(&self) -> &[Tx] {
        &self.tx_log
    }

    pub fn find(&self, id: &str) -> Option<&Tx> {
        self.tx_log.iter().find(|tx| tx.id().as_str() == id)
    }

    pub fn is_reversed(&self, id: &str) -> bool {
        self.reversed.iter().any(|reversed| reversed.as_str() == id)
    }

    /// **Deposit funds**
    ///
    /// # Errors
    /// - Negative amount, `AccountingError::InvalidAmount`;
    /// - Balance overflow, `AccountingError::AccountOverFunded`.
    pub fn deposit(
        &mut self,
        amount: i64,
        timestamp: DateTime<Utc>,
    ) -> Result<Tx, AccountingError> {
        self.record(Deposit::new(amount, timestamp).into())
    }

    /// **Withdraw funds**
    ///
    /// # Errors
    /// - Account under-funded, `AccountingError::InsufficientFunds`;
    /// - Balance overflow, `AccountingError::AccountOverFunded`.
    pub fn withdraw(
        &mut self,
        amount: i64,
        timestamp: DateTime<Utc>,
    ) -> Result<Tx, AccountingError> {
        self.record(Withdrawal::new(amount, timestamp).into())
    }

    /// **Applies a transaction that was built elsewhere**
    ///
    /// A transaction can be processed only once.
    ///
    /// # Errors
    /// - The transaction is already in the log, `AccountingError::DuplicateTransaction`;
    /// - Any error of the transaction's own `apply`.
    pub fn process(&mut self, tx: Tx) -> Result<Decimal, AccountingError> {
        if self.find(tx.id().as_str()).is_some() {
            return Err(AccountingError::DuplicateTransaction(tx.id().to_string()));
        }

        self.record(tx)?;
        Ok(self.balance())
    }

    /// **Reverses a recorded withdrawal**
    ///
    /// Returns the balance after the reversal.
    ///
    /// # Errors
    /// - No such transaction in the log, `AccountingError::TxNotFound`;
    /// - The transaction is a deposit, `AccountingError::NotReversible`;
    /// - The withdrawal was reversed before, `AccountingError::AlreadyReversed`;
    /// - Balance overflow, `AccountingError::AccountOverFunded`.
    pub fn reverse(&mut self, id: &str) -> Result<Decimal, AccountingError> {
        let withdrawal = self
            .tx_log
            .iter()
            .find(|tx| tx.id().as_str() == id)
            .ok_or_else(|| AccountingError::TxNotFound(id.to_string()))?
            .as_withdrawal()
            .ok_or_else(|| AccountingError::NotReversible(id.to_string()))?;

        if self.reversed.contains(withdrawal.id()) {
            return Err(AccountingError::AlreadyReversed(id.to_string()));
        }

        if !withdrawal.reverse(&mut self.account) {
            return Err(AccountingError::AccountOverFunded(withdrawal.amount()));
        }
        self.reversed.insert(withdrawal.id().clone());

        Ok(self.balance())
    }

    /// **Takes a snapshot of the balance and the log**
    pub fn statement(&self) -> Statement<'_> {
        Statement {
            balance: self.balance(),
            transactions: &self.tx_log,
            reversed: self.reversed.iter().collect(),
        }
    }

    fn record(&mut self, tx: Tx) -> Result<Tx, AccountingError> {
        tx.apply(&mut self.account)?;
        log::debug!("recorded {}", tx.id());
        self.tx_log.push(tx.clone());
        Ok(tx)
    }
}

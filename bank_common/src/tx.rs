use crate::account::Account;
use crate::errors::AccountingError;
use crate::validation::{has_sufficient_funds, is_valid_deposit_amount};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// The timestamp part of a [`TxId`], down to milliseconds
const TX_ID_TIME_FORMAT: &str = "%Y%m%d%H%M%S%3f";

/// **A transaction identifier**
///
/// Made of the transaction's timestamp followed by a random UUID v4,
/// so two transactions created at the same instant still get distinct IDs.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct TxId(String);

impl TxId {
    pub fn generate(timestamp: DateTime<Utc>) -> Self {
        TxId(format!(
            "{}-{}",
            timestamp.format(TX_ID_TIME_FORMAT),
            Uuid::new_v4().simple()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// **Data shared by every transaction kind**
///
/// The fields are private and have no setters, so they can't change after construction.
/// The timestamp is a plain value: the caller keeps its own copy,
/// and every getter call hands out another one.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TxDetails {
    id: TxId,
    amount: i64,
    timestamp: DateTime<Utc>,
}

impl TxDetails {
    pub fn new(amount: i64, timestamp: DateTime<Utc>) -> Self {
        TxDetails {
            id: TxId::generate(timestamp),
            amount,
            timestamp,
        }
    }

    pub fn id(&self) -> &TxId {
        &self.id
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    fn render(&self, kind: &str) -> String {
        format!(
            "{kind} Transaction Details:\nTransaction ID: {}\nAmount: {}\nDate: {}",
            self.id, self.amount, self.timestamp
        )
    }
}

/// **The capability set of all transactions**
///
/// Implementors only have to expose their [`TxDetails`] and say how they
/// change an [`Account`]; the accessors are shared.
pub trait Transaction {
    fn details(&self) -> &TxDetails;

    /// Validates the transaction against the `account` and, if valid, updates its balance.
    ///
    /// Returns the resulting balance.
    ///
    /// # Errors
    /// The account is left untouched whenever an error is returned.
    fn apply(&self, account: &mut Account) -> Result<Decimal, AccountingError>;

    /// Renders the transaction's details as human-readable text.
    fn describe(&self) -> String;

    fn id(&self) -> &TxId {
        self.details().id()
    }

    fn amount(&self) -> i64 {
        self.details().amount()
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.details().timestamp()
    }
}

/// **A deposit**
///
/// Deposits are irreversible: there is no `reverse` method on this type.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Deposit {
    #[serde(flatten)]
    details: TxDetails,
}

impl Deposit {
    pub fn new(amount: i64, timestamp: DateTime<Utc>) -> Self {
        Deposit {
            details: TxDetails::new(amount, timestamp),
        }
    }
}

impl Transaction for Deposit {
    fn details(&self) -> &TxDetails {
        &self.details
    }

    /// Adds the amount to the account's balance.
    ///
    /// It is allowed to deposit 0.
    ///
    /// # Errors
    /// - Negative amount, `AccountingError::InvalidAmount`;
    /// - Decimal overflow of the balance, `AccountingError::AccountOverFunded`.
    fn apply(&self, account: &mut Account) -> Result<Decimal, AccountingError> {
        let amount = self.amount();

        if !is_valid_deposit_amount(amount) {
            let err = AccountingError::InvalidAmount(amount);
            log::warn!("{}", err);
            return Err(err);
        }

        let new_balance = account
            .balance()
            .checked_add(Decimal::from(amount))
            .ok_or(AccountingError::AccountOverFunded(amount))?;
        account.set_balance(new_balance);

        log::info!("Deposit of {} applied. New Balance: {}", amount, new_balance);

        Ok(new_balance)
    }

    fn describe(&self) -> String {
        self.details.render("Deposit")
    }
}

/// Logs the end of a withdrawal's processing when dropped,
/// so the line is written on every path out of [`Withdrawal::apply`].
struct ProcessingComplete;

impl Drop for ProcessingComplete {
    fn drop(&mut self) {
        log::info!("Transaction processing complete.");
    }
}

/// **A withdrawal**
///
/// Can be reversed with [`Withdrawal::reverse`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Withdrawal {
    #[serde(flatten)]
    details: TxDetails,
}

impl Withdrawal {
    pub fn new(amount: i64, timestamp: DateTime<Utc>) -> Self {
        Withdrawal {
            details: TxDetails::new(amount, timestamp),
        }
    }

    /// **Credits the amount back to the `account`**
    ///
    /// Nothing checks that this withdrawal was ever applied to that account;
    /// [`crate::teller::Teller::reverse`] does that bookkeeping.
    ///
    /// Returns `false`, leaving the account untouched, only if the balance
    /// can't hold the result.
    pub fn reverse(&self, account: &mut Account) -> bool {
        let amount = self.amount();

        match account.balance().checked_add(Decimal::from(amount)) {
            Some(new_balance) => {
                account.set_balance(new_balance);
                log::info!("Reversed Withdrawal: Restored {} to account.", amount);
                true
            }
            None => {
                log::warn!("Couldn't reverse withdrawal {}: balance overflow.", self.id());
                false
            }
        }
    }
}

impl Transaction for Withdrawal {
    fn details(&self) -> &TxDetails {
        &self.details
    }

    /// Subtracts the amount from the account's balance if the balance covers it.
    ///
    /// "Transaction processing complete." is logged on every outcome.
    ///
    /// Only the funds check applies. A negative amount isn't rejected:
    /// when it passes that check, it raises the balance by its absolute value.
    ///
    /// # Errors
    /// - Balance lower than the amount, `AccountingError::InsufficientFunds`;
    /// - Decimal overflow of the balance, `AccountingError::AccountOverFunded`.
    fn apply(&self, account: &mut Account) -> Result<Decimal, AccountingError> {
        let _complete = ProcessingComplete;

        let amount = self.amount();
        let balance = account.balance();

        if !has_sufficient_funds(balance, amount) {
            let err = AccountingError::InsufficientFunds(amount);
            log::warn!("{}", err);
            return Err(err);
        }

        let new_balance = balance
            .checked_sub(Decimal::from(amount))
            .ok_or(AccountingError::AccountOverFunded(amount))?;
        account.set_balance(new_balance);

        log::info!(
            "Withdrawal of {} applied. New Balance: {}",
            amount,
            new_balance
        );

        Ok(new_balance)
    }

    fn describe(&self) -> String {
        self.details.render("Withdrawal")
    }
}

/// **A transaction type**
///
/// Used wherever transactions of different kinds are kept together, e.g., in a log.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Tx {
    Deposit(Deposit),
    Withdrawal(Withdrawal),
}

impl Tx {
    pub fn as_withdrawal(&self) -> Option<&Withdrawal> {
        match self {
            Tx::Withdrawal(withdrawal) => Some(withdrawal),
            Tx::Deposit(_) => None,
        }
    }
}

impl Transaction for Tx {
    fn details(&self) -> &TxDetails {
        match self {
            Tx::Deposit(deposit) => deposit.details(),
            Tx::Withdrawal(withdrawal) => withdrawal.details(),
        }
    }

    fn apply(&self, account: &mut Account) -> Result<Decimal, AccountingError> {
        match self {
            Tx::Deposit(deposit) => deposit.apply(account),
            Tx::Withdrawal(withdrawal) => withdrawal.apply(account),
        }
    }

    fn describe(&self) -> String {
        match self {
            Tx::Deposit(deposit) => deposit.describe(),
            Tx::Withdrawal(withdrawal) => withdrawal.describe(),
        }
    }
}

impl From<Deposit> for Tx {
    fn from(deposit: Deposit) -> Self {
        Tx::Deposit(deposit)
    }
}

impl From<Withdrawal> for Tx {
    fn from(withdrawal: Withdrawal) -> Self {
        Tx::Withdrawal(withdrawal)
    }
}

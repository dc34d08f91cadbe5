//! # bank_common
//!
//! A bank account and the transactions that change its balance.
//!
//! An [`account::Account`] is a passive holder of a balance.
//! Transactions ([`tx::Deposit`], [`tx::Withdrawal`]) carry an amount, a timestamp and an ID,
//! and decide whether and how they change an account when applied.
//! A [`teller::Teller`] owns one account and keeps a log of everything applied to it.
//!
//! ```
//! use bank_common::account::Account;
//! use bank_common::errors::AccountingError;
//! use bank_common::tx::{Deposit, Transaction, Withdrawal};
//! use chrono::Utc;
//! use rust_decimal::Decimal;
//!
//! let mut account = Account::new(Decimal::from(500));
//!
//! Deposit::new(200, Utc::now()).apply(&mut account).unwrap();
//! Withdrawal::new(600, Utc::now()).apply(&mut account).unwrap();
//! assert_eq!(Decimal::from(100), account.balance());
//!
//! let result = Withdrawal::new(600, Utc::now()).apply(&mut account);
//! assert_eq!(Err(AccountingError::InsufficientFunds(600)), result);
//! assert_eq!(Decimal::from(100), account.balance());
//! ```

pub mod account;
pub mod cli;
pub mod errors;
pub mod schedule;
pub mod teller;
pub mod tx;
pub mod validation;

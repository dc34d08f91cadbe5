use bank_common::account::Account;
use bank_common::errors::AccountingError;
use bank_common::schedule::monthly_deposits;
use bank_common::teller::Teller;
use bank_common::tx::{Deposit, Transaction, Tx, Withdrawal};
use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::{Arc, Mutex};
use std::thread;

fn new_year() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

#[test]
fn deposit_then_withdrawals() {
    let mut account = Account::new(dec!(500));

    assert_eq!(
        Ok(dec!(700)),
        Deposit::new(200, new_year()).apply(&mut account)
    );
    assert_eq!(
        Ok(dec!(100)),
        Withdrawal::new(600, new_year()).apply(&mut account)
    );
    assert_eq!(
        Err(AccountingError::InsufficientFunds(600)),
        Withdrawal::new(600, new_year()).apply(&mut account)
    );
    assert_eq!(dec!(100), account.balance());
}

#[test]
fn negative_deposit_on_empty_account() {
    let mut account = Account::new(dec!(0));

    assert_eq!(
        Err(AccountingError::InvalidAmount(-50)),
        Deposit::new(-50, new_year()).apply(&mut account)
    );
    assert_eq!(dec!(0), account.balance());
}

#[test]
fn withdraw_then_reverse_restores_balance() {
    for start in [0i64, 1, 99, 1_000_000] {
        for amount in [0, start / 2, start] {
            let mut account = Account::new(Decimal::from(start));
            let withdrawal = Withdrawal::new(amount, new_year());

            assert!(withdrawal.apply(&mut account).is_ok());
            assert!(withdrawal.reverse(&mut account));
            assert_eq!(Decimal::from(start), account.balance());
        }
    }
}

#[test]
fn teller_session() {
    let mut teller = Teller::new(dec!(500));

    let deposit = teller.deposit(200, new_year()).unwrap();
    let withdrawal = teller.withdraw(600, new_year()).unwrap();
    assert_eq!(
        Err(AccountingError::InsufficientFunds(600)),
        teller.withdraw(600, new_year())
    );
    assert_eq!(dec!(100), teller.balance());

    assert_eq!(Ok(dec!(700)), teller.reverse(withdrawal.id().as_str()));
    assert_eq!(
        Err(AccountingError::NotReversible(deposit.id().to_string())),
        teller.reverse(deposit.id().as_str())
    );
    assert_eq!(dec!(700), teller.balance());
    assert_eq!(2, teller.tx_log().len());
}

#[test]
fn year_of_deposits_through_teller() {
    let mut teller = Teller::new(dec!(0));

    for payment in monthly_deposits(1200, new_year(), 12) {
        assert!(teller.process(Tx::from(payment)).is_ok());
    }

    assert_eq!(dec!(14400), teller.balance());
    assert_eq!(12, teller.tx_log().len());
}

#[test]
fn statement_serializes_to_json() {
    let mut teller = Teller::new(dec!(10));
    let deposit = teller.deposit(5, new_year()).unwrap();

    let json = serde_json::to_value(teller.statement()).unwrap();

    assert_eq!("15", json["balance"]);
    assert_eq!("deposit", json["transactions"][0]["kind"]);
    assert_eq!(deposit.id().as_str(), json["transactions"][0]["id"]);
    assert_eq!(5, json["transactions"][0]["amount"]);
    assert_eq!("2024-01-01T00:00:00Z", json["transactions"][0]["timestamp"]);
    assert!(json["reversed"].as_array().unwrap().is_empty());
}

/// Holding the lock for the whole `apply` makes its read-modify-write a single critical section.
#[test]
fn shared_account_under_mutex() {
    let account = Arc::new(Mutex::new(Account::new(dec!(1000))));

    let handles: Vec<_> = (0..10)
        .map(|_| {
            let account = Arc::clone(&account);
            thread::spawn(move || {
                for _ in 0..10 {
                    let mut account = account.lock().unwrap();
                    Withdrawal::new(5, Utc::now()).apply(&mut account).unwrap();
                    Deposit::new(3, Utc::now()).apply(&mut account).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(dec!(800), account.lock().unwrap().balance());
}

//! Recurring payments

use crate::tx::Deposit;
use chrono::{DateTime, Months, Utc};

/// **Builds `months` deposits of the same `amount`, one month apart**
///
/// The first deposit is dated `start`. Dates past the end of a shorter month
/// are clamped to that month's last day, e.g., Jan 31 is followed by Feb 29 in 2024.
/// Each date is computed from `start`, so clamping in one month doesn't carry over to the next.
///
/// Stops early if a date would fall outside the range `chrono` can represent.
pub fn monthly_deposits(amount: i64, start: DateTime<Utc>, months: u32) -> Vec<Deposit> {
    (0..months)
        .map_while(|offset| start.checked_add_months(Months::new(offset)))
        .map(|date| Deposit::new(amount, date))
        .collect()
}

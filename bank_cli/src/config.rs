//! Runtime configuration, read from the environment

use rust_decimal::Decimal;
use std::env;
use std::str::FromStr;

/// Holds the account's opening balance, e.g., `500` or `12.75`.
pub const OPENING_BALANCE_VAR: &str = "BANK_OPENING_BALANCE";

/// Used when `RUST_LOG` isn't set.
pub const DEFAULT_LOG_FILTER: &str = "bank=info";

#[derive(Debug, Default, PartialEq)]
pub struct Config {
    pub opening_balance: Decimal,
}

impl Config {
    /// **Reads the configuration from the environment**
    ///
    /// Missing or unparsable values fall back to their defaults.
    pub fn from_env() -> Self {
        Self::from_opening_balance(env::var(OPENING_BALANCE_VAR).ok().as_deref())
    }

    fn from_opening_balance(value: Option<&str>) -> Self {
        let opening_balance = match value.map(str::trim) {
            None | Some("") => Decimal::ZERO,
            Some(value) => Decimal::from_str(value).unwrap_or_else(|err| {
                log::warn!(
                    "Ignoring {}=\"{}\": {}. Starting from {}.",
                    OPENING_BALANCE_VAR,
                    value,
                    err,
                    Decimal::ZERO
                );
                Decimal::ZERO
            }),
        };

        Config { opening_balance }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn missing_opening_balance_defaults_to_zero() {
        assert_eq!(Config::default(), Config::from_opening_balance(None));
        assert_eq!(Config::default(), Config::from_opening_balance(Some("  ")));
    }

    #[test]
    fn opening_balance_is_parsed() {
        assert_eq!(
            dec!(500),
            Config::from_opening_balance(Some("500")).opening_balance
        );
        assert_eq!(
            dec!(-12.75),
            Config::from_opening_balance(Some(" -12.75 ")).opening_balance
        );
    }

    #[test]
    fn unparsable_opening_balance_defaults_to_zero() {
        assert_eq!(
            Decimal::ZERO,
            Config::from_opening_balance(Some("lots")).opening_balance
        );
    }
}

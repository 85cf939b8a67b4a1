// In crates/core-types/src/types.rs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A trading instrument identifier (e.g., "EURUSD").
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol(pub String);

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The ISO 4217 currency codes the instrument table uses.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Aud,
    Cad,
    Chf,
    Eur,
    Gbp,
    Jpy,
    Nzd,
    Usd,
}

impl Currency {
    /// The three-letter code, as it appears in rate-API query strings and bodies.
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Aud => "AUD",
            Currency::Cad => "CAD",
            Currency::Chf => "CHF",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Jpy => "JPY",
            Currency::Nzd => "NZD",
            Currency::Usd => "USD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Currency {
    type Err = Error;

    /// Parses a three-letter code, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "AUD" => Ok(Currency::Aud),
            "CAD" => Ok(Currency::Cad),
            "CHF" => Ok(Currency::Chf),
            "EUR" => Ok(Currency::Eur),
            "GBP" => Ok(Currency::Gbp),
            "JPY" => Ok(Currency::Jpy),
            "NZD" => Ok(Currency::Nzd),
            "USD" => Ok(Currency::Usd),
            _ => Err(Error::UnknownCurrency(s.to_string())),
        }
    }
}

/// Static metadata for one tradable instrument.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct InstrumentSpec {
    pub symbol: Symbol,
    /// Decimal precision of one price increment.
    pub digits: u32,
    /// Units per one lot.
    pub contract_size: f64,
    /// The currency the raw profit is denominated in before conversion to JPY.
    pub profit_currency: Currency,
}

impl InstrumentSpec {
    /// The value of a single point of price movement: `10^(-digits)`.
    pub fn point_value(&self) -> f64 {
        10f64.powi(-(self.digits as i32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_parses_case_insensitively() {
        assert_eq!("usd".parse::<Currency>().unwrap(), Currency::Usd);
        assert_eq!("JPY".parse::<Currency>().unwrap(), Currency::Jpy);
    }

    #[test]
    fn unknown_currency_code_is_rejected() {
        assert!("XXX".parse::<Currency>().is_err());
    }

    #[test]
    fn currency_displays_as_its_code() {
        assert_eq!(Currency::Eur.to_string(), "EUR");
    }

    #[test]
    fn point_value_scales_with_digits() {
        let spec = InstrumentSpec {
            symbol: Symbol("USDJPY".to_string()),
            digits: 3,
            contract_size: 100_000.0,
            profit_currency: Currency::Jpy,
        };
        assert!((spec.point_value() - 0.001).abs() < 1e-12);
    }
}

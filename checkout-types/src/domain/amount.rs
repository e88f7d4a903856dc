//! Monetary amounts in minor units with an embedded currency.

use currency_codes::{CurrencyCode, format_minor_units};
use serde::{Deserialize, Serialize};

/// Total amount of a payment intent.
///
/// `value` is in the smallest unit of the currency (pence, cents, fils).
/// `value_string` is the same amount in the major unit, rendered with the
/// currency's exponent, e.g. 10 GBP becomes `"0.10"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Amount {
    pub value: i64,
    pub value_string: String,
    pub currency_code: CurrencyCode,
}

impl Amount {
    /// Creates an amount and derives its decimal rendering.
    pub fn new(value: i64, currency_code: CurrencyCode) -> Self {
        Self {
            value,
            value_string: format_minor_units(value, currency_code),
            currency_code,
        }
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.value_string, self.currency_code)
    }
}

/// Amount attached to a single item line. No decimal rendering is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemLineAmount {
    pub value: i64,
    pub currency_code: CurrencyCode,
}

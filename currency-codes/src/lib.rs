//! ISO 4217 Currency Table with Macro-Based Code Generation
//!
//! The set of currencies the checkout accepts is fixed at compile time.
//! Each entry carries its alphabetic code, numeric code and minor-unit
//! exponent (the number of fraction digits in the major unit). Currencies are
//! declared with the `define_currencies!` macro, which generates the
//! `CurrencyCode` enum together with lookup and parsing code.
//!
//! # Adding a New Currency
//! Add a line to the `define_currencies!` invocation:
//! ```ignore
//! define_currencies! {
//!     // ... existing currencies ...
//!     THB => ("THB", 764, 2),
//! }
//! ```
//!
//! # Example
//! ```
//! use currency_codes::{CurrencyCode, format_minor_units};
//!
//! let gbp: CurrencyCode = "GBP".parse().unwrap();
//! assert_eq!(gbp.exponent(), 2);
//! assert_eq!(format_minor_units(10, gbp), "0.10");
//! ```

/// Error returned when a string is not a recognized currency code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown currency: {0}")]
pub struct UnknownCurrency(pub String);

// ─────────────────────────────────────────────────────────────────────────────
// THE MACRO: Defines CurrencyCode and its lookup tables
// ─────────────────────────────────────────────────────────────────────────────

/// Macro to define the supported currency table.
///
/// # Syntax
/// ```ignore
/// define_currencies! {
///     Name => ("CODE", numeric_code, exponent),
/// }
/// ```
macro_rules! define_currencies {
    (
        $(
            $name:ident => ($code:literal, $numeric:expr, $exponent:expr)
        ),* $(,)?
    ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum CurrencyCode {
            $($name),*
        }

        impl CurrencyCode {
            /// Alphabetic ISO 4217 code.
            pub fn code(&self) -> &'static str {
                match self {
                    $(CurrencyCode::$name => $code),*
                }
            }

            /// Numeric ISO 4217 code.
            pub fn numeric(&self) -> u16 {
                match self {
                    $(CurrencyCode::$name => $numeric),*
                }
            }

            /// Number of fraction digits in the major unit.
            pub fn exponent(&self) -> u8 {
                match self {
                    $(CurrencyCode::$name => $exponent),*
                }
            }

            /// Every supported currency, in declaration order.
            pub fn all() -> &'static [CurrencyCode] {
                &[$(CurrencyCode::$name),*]
            }
        }

        impl std::fmt::Display for CurrencyCode {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.code())
            }
        }

        /// Parsing is exact: codes are three upper-case letters.
        impl std::str::FromStr for CurrencyCode {
            type Err = UnknownCurrency;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($code => Ok(CurrencyCode::$name),)*
                    _ => Err(UnknownCurrency(s.to_string())),
                }
            }
        }
    };
}

// ─────────────────────────────────────────────────────────────────────────────
// CURRENCY DEFINITIONS - Add new currencies here!
// ─────────────────────────────────────────────────────────────────────────────

define_currencies! {
    GBP => ("GBP", 826, 2),
    EUR => ("EUR", 978, 2),
    USD => ("USD", 840, 2),
    AED => ("AED", 784, 2),
    AUD => ("AUD", 36, 2),
    BGN => ("BGN", 975, 2),
    BHD => ("BHD", 48, 3),
    CAD => ("CAD", 124, 2),
    CHF => ("CHF", 756, 2),
    CNY => ("CNY", 156, 2),
    CZK => ("CZK", 203, 2),
    DKK => ("DKK", 208, 2),
    HKD => ("HKD", 344, 2),
    HUF => ("HUF", 348, 2),
    INR => ("INR", 356, 2),
    ISK => ("ISK", 352, 0),
    JOD => ("JOD", 400, 3),
    JPY => ("JPY", 392, 0),
    KRW => ("KRW", 410, 0),
    KWD => ("KWD", 414, 3),
    MXN => ("MXN", 484, 2),
    NOK => ("NOK", 578, 2),
    NZD => ("NZD", 554, 2),
    OMR => ("OMR", 512, 3),
    PLN => ("PLN", 985, 2),
    RON => ("RON", 946, 2),
    SEK => ("SEK", 752, 2),
    SGD => ("SGD", 702, 2),
    TND => ("TND", 788, 3),
    TRY => ("TRY", 949, 2),
    ZAR => ("ZAR", 710, 2),
}

// ─────────────────────────────────────────────────────────────────────────────
// Formatting
// ─────────────────────────────────────────────────────────────────────────────

/// Renders an amount in minor units as a decimal string in the major unit,
/// with exactly `currency.exponent()` fraction digits.
pub fn format_minor_units(amount: i64, currency: CurrencyCode) -> String {
    format_with_exponent(amount, currency.exponent())
}

fn format_with_exponent(amount: i64, exponent: u8) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let magnitude = amount.unsigned_abs();
    if exponent == 0 {
        return format!("{}{}", sign, magnitude);
    }
    let divisor = 10u64.pow(u32::from(exponent));
    let major = magnitude / divisor;
    let minor = magnitude % divisor;
    format!(
        "{}{}.{:0width$}",
        sign,
        major,
        minor,
        width = usize::from(exponent)
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

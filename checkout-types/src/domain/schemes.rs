//! Card and wallet schemes a merchant can accept.

use serde::{Deserialize, Serialize};

/// Card networks understood by the checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardScheme {
    Visa,
    Mastercard,
    Maestro,
    Amex,
}

impl AsRef<str> for CardScheme {
    fn as_ref(&self) -> &str {
        match self {
            Self::Visa => "VISA",
            Self::Mastercard => "MASTERCARD",
            Self::Maestro => "MAESTRO",
            Self::Amex => "AMEX",
        }
    }
}

impl std::fmt::Display for CardScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl std::str::FromStr for CardScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "VISA" => Ok(Self::Visa),
            "MASTERCARD" => Ok(Self::Mastercard),
            "MAESTRO" => Ok(Self::Maestro),
            "AMEX" => Ok(Self::Amex),
            _ => Err(format!("Unknown card scheme: {}", s)),
        }
    }
}

/// Wallets the checkout can offer alongside cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WalletScheme {
    ApplePay,
    GooglePay,
}

impl AsRef<str> for WalletScheme {
    fn as_ref(&self) -> &str {
        match self {
            Self::ApplePay => "APPLE_PAY",
            Self::GooglePay => "GOOGLE_PAY",
        }
    }
}

impl std::fmt::Display for WalletScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl std::str::FromStr for WalletScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "APPLE_PAY" => Ok(Self::ApplePay),
            "GOOGLE_PAY" => Ok(Self::GooglePay),
            _ => Err(format!("Unknown wallet scheme: {}", s)),
        }
    }
}

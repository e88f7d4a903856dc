//! Payment intent lifecycle status.

use serde::{Deserialize, Serialize};

/// Backend status of a payment intent.
///
/// Only the statuses the checkout reacts to are modelled. Anything else
/// fails to parse and is treated as "not collected" by the mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentIntentStatus {
    Created,
    Authorized,
    Captured,
    Reversed,
    Refunded,
    Canceled,
}

impl PaymentIntentStatus {
    /// Funds have already been reserved or taken for this intent.
    pub fn is_collected(&self) -> bool {
        matches!(self, Self::Authorized | Self::Captured)
    }
}

impl AsRef<str> for PaymentIntentStatus {
    fn as_ref(&self) -> &str {
        match self {
            Self::Created => "Created",
            Self::Authorized => "Authorized",
            Self::Captured => "Captured",
            Self::Reversed => "Reversed",
            Self::Refunded => "Refunded",
            Self::Canceled => "Canceled",
        }
    }
}

impl std::fmt::Display for PaymentIntentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl std::str::FromStr for PaymentIntentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Created" => Ok(Self::Created),
            "Authorized" => Ok(Self::Authorized),
            "Captured" => Ok(Self::Captured),
            "Reversed" => Ok(Self::Reversed),
            "Refunded" => Ok(Self::Refunded),
            "Canceled" => Ok(Self::Canceled),
            _ => Err(format!("Unknown payment intent status: {}", s)),
        }
    }
}

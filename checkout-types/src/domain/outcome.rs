//! Terminal outcomes published to callers and observers.
//!
//! Callers only ever see these coarse outcomes. The typed cause of a
//! failure stays inside the repository that produced it.

use serde::{Deserialize, Serialize};

use super::payment_intent::PaymentIntentDomainEntity;
use super::payment_methods::PaymentMethodsDomainEntity;

/// Result of fetching the saved payment methods of a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FetchPaymentMethodsResult {
    Success(PaymentMethodsDomainEntity),
    Failure,
}

impl FetchPaymentMethodsResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Result of deleting a saved payment method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeletePaymentMethodsResult {
    Success,
    Failure,
}

impl DeletePaymentMethodsResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Result of fetching and validating a payment intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentIntentResult {
    Success(Box<PaymentIntentDomainEntity>),
    Failure,
}

impl PaymentIntentResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

//! Saved payment methods of a customer.

use serde::{Deserialize, Serialize};

use super::schemes::CardScheme;

/// A card the customer saved on a previous checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPaymentMethod {
    pub id: String,
    /// Masked card number as returned by the backend.
    pub pan: String,
    pub expiry_date: String,
    pub scheme: CardScheme,
}

/// The usable saved payment methods, in backend order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethodsDomainEntity {
    pub items: Vec<SavedPaymentMethod>,
}

impl PaymentMethodsDomainEntity {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks up a saved method by its backend id.
    pub fn find(&self, id: &str) -> Option<&SavedPaymentMethod> {
        self.items.iter().find(|item| item.id == id)
    }
}

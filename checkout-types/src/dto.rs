//! Wire payloads returned by the checkout backend.
//!
//! Every field is optional: the backend omits blocks freely and the mappers
//! decide what is required. Unknown fields are ignored.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Shared
// ─────────────────────────────────────────────────────────────────────────────

/// Amount in minor units plus an ISO 4217 code, unvalidated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AmountPayload {
    pub value: Option<i64>,
    pub currency_code: Option<String>,
}

impl AmountPayload {
    pub fn new(value: i64, currency_code: impl Into<String>) -> Self {
        Self {
            value: Some(value),
            currency_code: Some(currency_code.into()),
        }
    }
}

/// Card and wallet schemes as raw strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SupportedPaymentMethodsPayload {
    pub card_schemes: Option<Vec<String>>,
    pub wallets: Option<Vec<String>>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Payment intent
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerPayload {
    pub id: Option<String>,
    pub email_address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MerchantConfigPayload {
    pub supported_payment_methods: Option<SupportedPaymentMethodsPayload>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandingPayload {
    #[serde(rename = "logoURL")]
    pub logo_url: Option<String>,
    #[serde(rename = "faviconURL")]
    pub favicon_url: Option<String>,
}

/// A "should the checkout collect X" switch from the merchant config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CollectionPayload {
    pub collection_required: Option<bool>,
}

impl CollectionPayload {
    pub fn required(collection_required: bool) -> Self {
        Self {
            collection_required: Some(collection_required),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigPayload {
    pub trading_name: Option<String>,
    pub branding: Option<BrandingPayload>,
    pub customer_email: Option<CollectionPayload>,
    pub billing_address: Option<CollectionPayload>,
    pub shipping_details: Option<CollectionPayload>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemLinePayload {
    pub caption: Option<String>,
    pub amount_total: Option<AmountPayload>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BillingAddressPayload {
    pub postcode: Option<String>,
    pub country_code: Option<String>,
    pub city: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShippingDetailsPayload {
    pub name: Option<String>,
    pub delivery_notes: Option<String>,
}

/// Raw payment intent as returned by `GET /payment-intents/public/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentIntentPayload {
    pub id: Option<String>,
    pub capture_mode: Option<String>,
    pub transaction_source: Option<String>,
    pub client_session_secret: Option<String>,
    pub client_session_secret_expiration_date: Option<String>,
    pub status: Option<String>,
    pub payment_methods: Option<Vec<String>>,
    pub total_amount: Option<AmountPayload>,
    pub customer: Option<CustomerPayload>,
    pub reference: Option<String>,
    pub merchant_config: Option<MerchantConfigPayload>,
    pub payment_source: Option<String>,
    pub config: Option<ConfigPayload>,
    pub merchant_initiated_transaction_type: Option<String>,
    pub item_lines: Option<Vec<ItemLinePayload>>,
    pub billing_address: Option<BillingAddressPayload>,
    pub shipping_details: Option<ShippingDetailsPayload>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Payment methods
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardDetailsPayload {
    pub pan: Option<String>,
    pub expiry_date: Option<String>,
    pub scheme: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SavedPaymentMethodPayload {
    pub id: Option<String>,
    pub card_details: Option<CardDetailsPayload>,
}

/// Raw response of `GET /customers/public/{customerId}/payment-methods`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentMethodsPayload {
    pub customer_id: Option<String>,
    pub merchant_id: Option<String>,
    pub saved_payment_methods: Option<Vec<SavedPaymentMethodPayload>>,
    pub supported_payment_methods: Option<SupportedPaymentMethodsPayload>,
}

//! Validated payment intent, as consumed by the checkout UI state.

use serde::{Deserialize, Serialize};

use super::amount::{Amount, ItemLineAmount};
use super::schemes::{CardScheme, WalletScheme};

/// A single line of the order summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemLine {
    pub caption: String,
    pub amount: ItemLineAmount,
}

/// Billing address the backend already holds for the intent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingAddress {
    pub postcode: Option<String>,
    pub country_code: Option<String>,
    pub city: Option<String>,
}

/// Shipping details the backend already holds for the intent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingDetails {
    pub name: Option<String>,
    pub delivery_notes: Option<String>,
}

/// A payment intent that passed validation.
///
/// Constructed only by the payload mapper; every field is already
/// normalized and the total amount carries a recognized currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentDomainEntity {
    pub id: String,
    /// Client session secret used to authorize the payment.
    pub payment_token: String,
    pub total_amount: Amount,
    pub supported_cards_schemes: Vec<CardScheme>,
    pub supported_wallet_schemes: Vec<WalletScheme>,
    pub item_lines: Vec<ItemLine>,
    pub customer_id: Option<String>,
    pub collection_email_required: bool,
    pub collection_billing_address_required: bool,
    pub collection_shipping_address_required: bool,
    pub is_pre_auth_payment: bool,
    pub is_set_up_intent_payment: bool,
    pub is_payment_already_collected: bool,
    pub is_virtual_terminal_payment: bool,
    pub order_id: String,
    pub merchant_name: String,
    pub customer_email_address: Option<String>,
    pub billing_address: BillingAddress,
    pub shipping_details: ShippingDetails,
}

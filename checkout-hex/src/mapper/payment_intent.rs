//! Payment intent payload mapper.
//!
//! Turns the raw backend payload into a [`PaymentIntentDomainEntity`] or
//! rejects it. Pure and deterministic: no IO, no logging.

use checkout_types::{
    Amount, BillingAddress, CardScheme, CollectionPayload, CurrencyCode, InvalidPayload, ItemLine,
    ItemLineAmount, ItemLinePayload, PaymentIntentDomainEntity, PaymentIntentPayload,
    PaymentIntentStatus, ShippingDetails, SupportedPaymentMethodsPayload, WalletScheme,
};

const MANUAL_CAPTURE_MODE: &str = "Manual";
const VIRTUAL_TERMINAL_SOURCE: &str = "virtual-terminal";

/// Maps payment intent payloads into domain entities.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaymentIntentMapper;

impl PaymentIntentMapper {
    pub fn new() -> Self {
        Self
    }

    /// Validates and transforms a raw payment intent.
    ///
    /// # Validation
    /// - `id` and `clientSessionSecret` must be present and non-empty
    /// - `totalAmount` must be present with a currency from the supported table
    ///
    /// An unrecognized status never fails the mapping; the intent is simply
    /// treated as not yet collected.
    pub fn map_payload(
        &self,
        raw: &PaymentIntentPayload,
    ) -> Result<PaymentIntentDomainEntity, InvalidPayload> {
        let id = required(raw.id.as_deref(), "id")?;
        let payment_token =
            required(raw.client_session_secret.as_deref(), "clientSessionSecret")?;
        let total_amount = map_total_amount(raw)?;

        let status = raw
            .status
            .as_deref()
            .and_then(|s| s.parse::<PaymentIntentStatus>().ok());
        let supported = raw
            .merchant_config
            .as_ref()
            .and_then(|config| config.supported_payment_methods.as_ref());
        let config = raw.config.as_ref();

        Ok(PaymentIntentDomainEntity {
            id,
            payment_token,
            total_amount,
            supported_cards_schemes: card_schemes(supported),
            supported_wallet_schemes: wallet_schemes(supported),
            item_lines: item_lines(raw.item_lines.as_deref()),
            customer_id: raw.customer.as_ref().and_then(|c| c.id.clone()),
            collection_email_required: collection_required(config.and_then(|c| c.customer_email)),
            collection_billing_address_required: collection_required(
                config.and_then(|c| c.billing_address),
            ),
            collection_shipping_address_required: collection_required(
                config.and_then(|c| c.shipping_details),
            ),
            is_pre_auth_payment: raw
                .capture_mode
                .as_deref()
                .is_some_and(|mode| mode.eq_ignore_ascii_case(MANUAL_CAPTURE_MODE)),
            is_set_up_intent_payment: raw
                .merchant_initiated_transaction_type
                .as_deref()
                .is_some_and(|kind| !kind.is_empty()),
            is_payment_already_collected: status.is_some_and(|s| s.is_collected()),
            is_virtual_terminal_payment: raw.payment_source.as_deref()
                == Some(VIRTUAL_TERMINAL_SOURCE),
            order_id: raw.reference.clone().unwrap_or_default(),
            merchant_name: config
                .and_then(|c| c.trading_name.clone())
                .unwrap_or_default(),
            customer_email_address: raw.customer.as_ref().and_then(|c| c.email_address.clone()),
            billing_address: raw
                .billing_address
                .as_ref()
                .map(|address| BillingAddress {
                    postcode: address.postcode.clone(),
                    country_code: address.country_code.clone(),
                    city: address.city.clone(),
                })
                .unwrap_or_default(),
            shipping_details: raw
                .shipping_details
                .as_ref()
                .map(|details| ShippingDetails {
                    name: details.name.clone(),
                    delivery_notes: details.delivery_notes.clone(),
                })
                .unwrap_or_default(),
        })
    }
}

fn required(value: Option<&str>, field: &'static str) -> Result<String, InvalidPayload> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.to_string()),
        _ => Err(InvalidPayload::MissingField(field)),
    }
}

fn collection_required(flag: Option<CollectionPayload>) -> bool {
    flag.and_then(|c| c.collection_required).unwrap_or(false)
}

fn map_total_amount(raw: &PaymentIntentPayload) -> Result<Amount, InvalidPayload> {
    let amount = raw
        .total_amount
        .as_ref()
        .ok_or(InvalidPayload::MissingField("totalAmount"))?;
    let code = amount.currency_code.as_deref().unwrap_or_default();
    let currency: CurrencyCode = code
        .parse()
        .map_err(|_| InvalidPayload::UnsupportedCurrency(code.to_string()))?;
    let value = amount
        .value
        .ok_or(InvalidPayload::MissingField("totalAmount.value"))?;
    Ok(Amount::new(value, currency))
}

fn card_schemes(supported: Option<&SupportedPaymentMethodsPayload>) -> Vec<CardScheme> {
    supported
        .and_then(|s| s.card_schemes.as_deref())
        .unwrap_or_default()
        .iter()
        .filter_map(|scheme| scheme.parse().ok())
        .collect()
}

fn wallet_schemes(supported: Option<&SupportedPaymentMethodsPayload>) -> Vec<WalletScheme> {
    supported
        .and_then(|s| s.wallets.as_deref())
        .unwrap_or_default()
        .iter()
        .filter_map(|scheme| scheme.parse().ok())
        .collect()
}

// Lines with a missing caption, missing amount or unknown currency are skipped.
fn item_lines(lines: Option<&[ItemLinePayload]>) -> Vec<ItemLine> {
    lines
        .unwrap_or_default()
        .iter()
        .filter_map(|line| {
            let caption = line.caption.clone()?;
            let amount = line.amount_total.as_ref()?;
            let currency_code = amount.currency_code.as_deref()?.parse().ok()?;
            Some(ItemLine {
                caption,
                amount: ItemLineAmount {
                    value: amount.value?,
                    currency_code,
                },
            })
        })
        .collect()
}

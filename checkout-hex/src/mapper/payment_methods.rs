//! Saved payment methods mapper.

use checkout_types::{
    CardScheme, InvalidPayload, PaymentMethodsDomainEntity, PaymentMethodsPayload,
    SavedPaymentMethod, SavedPaymentMethodPayload,
};

/// Maps the customer payment-methods payload into the list of usable cards.
#[derive(Debug, Clone, Copy, Default)]
pub struct SupportedPaymentMethodsMapper;

impl SupportedPaymentMethodsMapper {
    pub fn new() -> Self {
        Self
    }

    /// Keeps only complete entries with a known card scheme.
    ///
    /// A payload without a `savedPaymentMethods` list is rejected; an empty
    /// list is a valid customer with no saved cards.
    pub fn map(
        &self,
        raw: &PaymentMethodsPayload,
    ) -> Result<PaymentMethodsDomainEntity, InvalidPayload> {
        let saved = raw
            .saved_payment_methods
            .as_ref()
            .ok_or(InvalidPayload::MissingField("savedPaymentMethods"))?;

        Ok(PaymentMethodsDomainEntity {
            items: saved.iter().filter_map(map_saved_method).collect(),
        })
    }
}

fn map_saved_method(raw: &SavedPaymentMethodPayload) -> Option<SavedPaymentMethod> {
    let card = raw.card_details.as_ref()?;
    let scheme: CardScheme = card.scheme.as_deref()?.parse().ok()?;
    Some(SavedPaymentMethod {
        id: non_empty(raw.id.as_deref())?,
        pan: non_empty(card.pan.as_deref())?,
        expiry_date: non_empty(card.expiry_date.as_deref())?,
        scheme,
    })
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

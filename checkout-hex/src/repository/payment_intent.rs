//! Payment Intent Repository
//!
//! Fetches a payment intent and runs it through the payload mapper.

use checkout_types::{
    FetchError, PaymentIntentDataSource, PaymentIntentDomainEntity, PaymentIntentPayload,
    PaymentIntentResult,
};
use tokio::sync::watch;

use super::latest::LatestResult;
use crate::mapper::PaymentIntentMapper;

/// Repository for the payment intent driving a checkout session.
pub struct PaymentIntentRepository<D: PaymentIntentDataSource> {
    data_source: D,
    mapper: PaymentIntentMapper,
    latest: LatestResult<PaymentIntentResult>,
}

impl<D: PaymentIntentDataSource> PaymentIntentRepository<D> {
    pub fn new(data_source: D) -> Self {
        Self {
            data_source,
            mapper: PaymentIntentMapper::new(),
            latest: LatestResult::new(),
        }
    }

    /// Fetches and validates a payment intent.
    ///
    /// Invalid payloads (unsupported currency, missing id or token) end in
    /// `Failure` just like transport errors. Cancelling the future restores
    /// whatever observers saw before the call.
    pub async fn fetch(&self, payment_id: &str) -> PaymentIntentResult {
        let pending = self.latest.begin();
        let generation = pending.generation();

        let result = match self.load(payment_id).await {
            Ok(entity) => {
                tracing::debug!(
                    payment_id,
                    amount = %entity.total_amount,
                    collected = entity.is_payment_already_collected,
                    "Fetched payment intent"
                );
                PaymentIntentResult::Success(Box::new(entity))
            }
            Err(e) => {
                tracing::warn!(payment_id, error = %e, "Failed to fetch payment intent");
                PaymentIntentResult::Failure
            }
        };

        if !pending.publish(result.clone()) {
            tracing::debug!(payment_id, ?generation, "Discarded stale payment intent result");
        }
        result
    }

    /// Latest fetch result; `None` before any fetch completes.
    pub fn observe(&self) -> watch::Receiver<Option<PaymentIntentResult>> {
        self.latest.subscribe()
    }

    pub(crate) async fn load(
        &self,
        payment_id: &str,
    ) -> Result<PaymentIntentDomainEntity, FetchError> {
        let body = self.data_source.fetch_payment_intent(payment_id).await?;
        let raw: PaymentIntentPayload = serde_json::from_str(&body)?;
        Ok(self.mapper.map_payload(&raw)?)
    }
}

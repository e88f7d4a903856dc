//! Payment Methods Repository
//!
//! Orchestrates fetch/delete round-trips through the data source port.
//! Contains NO transport logic - only deserialization, mapping and outcome
//! translation.

use checkout_types::{
    DeletePaymentMethodsResult, FetchError, FetchPaymentMethodsResult, PaymentMethodsDataSource,
    PaymentMethodsDomainEntity, PaymentMethodsPayload,
};
use tokio::sync::watch;

use super::latest::LatestResult;
use crate::mapper::SupportedPaymentMethodsMapper;

/// Repository for a customer's saved payment methods.
///
/// Generic over `D: PaymentMethodsDataSource` - the transport is injected.
pub struct PaymentMethodsRepository<D: PaymentMethodsDataSource> {
    data_source: D,
    mapper: SupportedPaymentMethodsMapper,
    latest: LatestResult<FetchPaymentMethodsResult>,
}

impl<D: PaymentMethodsDataSource> PaymentMethodsRepository<D> {
    /// Creates a repository over the given data source.
    pub fn new(data_source: D) -> Self {
        Self {
            data_source,
            mapper: SupportedPaymentMethodsMapper::new(),
            latest: LatestResult::new(),
        }
    }

    /// Returns a reference to the underlying data source.
    pub fn data_source(&self) -> &D {
        &self.data_source
    }

    /// Fetches and maps the saved payment methods of a customer.
    ///
    /// Always resolves to exactly one terminal result, which is also
    /// published to observers unless a newer fetch started meanwhile.
    /// Observers see `None` while the fetch is in flight; if the future is
    /// dropped before completing, they get the previous result back.
    pub async fn fetch(
        &self,
        customer_id: &str,
        customer_secret: &str,
    ) -> FetchPaymentMethodsResult {
        let pending = self.latest.begin();
        let generation = pending.generation();

        let result = match self.load(customer_id, customer_secret).await {
            Ok(entity) => {
                tracing::debug!(
                    customer_id,
                    methods = entity.items.len(),
                    "Fetched payment methods"
                );
                FetchPaymentMethodsResult::Success(entity)
            }
            Err(e) => {
                tracing::warn!(customer_id, error = %e, "Failed to fetch payment methods");
                FetchPaymentMethodsResult::Failure
            }
        };

        if !pending.publish(result.clone()) {
            tracing::debug!(customer_id, ?generation, "Discarded stale payment methods result");
        }
        result
    }

    /// Latest fetch result; `None` before any fetch completes.
    pub fn observe(&self) -> watch::Receiver<Option<FetchPaymentMethodsResult>> {
        self.latest.subscribe()
    }

    /// Deletes a saved payment method.
    pub async fn delete(
        &self,
        customer_id: &str,
        customer_secret: &str,
        payment_method_id: &str,
    ) -> DeletePaymentMethodsResult {
        match self
            .data_source
            .delete_payment_method(customer_id, customer_secret, payment_method_id)
            .await
        {
            Ok(()) => {
                tracing::info!(customer_id, payment_method_id, "Deleted payment method");
                DeletePaymentMethodsResult::Success
            }
            Err(e) => {
                tracing::warn!(
                    customer_id,
                    payment_method_id,
                    error = %e,
                    "Failed to delete payment method"
                );
                DeletePaymentMethodsResult::Failure
            }
        }
    }

    /// Deserialize-and-map step with the failure cause preserved.
    pub(crate) async fn load(
        &self,
        customer_id: &str,
        customer_secret: &str,
    ) -> Result<PaymentMethodsDomainEntity, FetchError> {
        let body = self
            .data_source
            .fetch_payment_methods(customer_id, customer_secret)
            .await?;
        let raw: PaymentMethodsPayload = serde_json::from_str(&body)?;
        Ok(self.mapper.map(&raw)?)
    }
}

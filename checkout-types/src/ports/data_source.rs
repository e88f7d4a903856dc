//! Data source ports.
//!
//! Adapters (HTTP client, test doubles) implement these traits. They return
//! the raw response body; deserialization belongs to the repositories.

use crate::error::DataSourceError;

/// Port for the customer payment-methods endpoints.
#[async_trait::async_trait]
pub trait PaymentMethodsDataSource: Send + Sync + 'static {
    /// Fetches the saved payment methods of a customer as raw JSON.
    async fn fetch_payment_methods(
        &self,
        customer_id: &str,
        customer_secret: &str,
    ) -> Result<String, DataSourceError>;

    /// Deletes one saved payment method.
    async fn delete_payment_method(
        &self,
        customer_id: &str,
        customer_secret: &str,
        payment_method_id: &str,
    ) -> Result<(), DataSourceError>;
}

/// Port for the public payment-intent endpoint.
#[async_trait::async_trait]
pub trait PaymentIntentDataSource: Send + Sync + 'static {
    /// Fetches a payment intent as raw JSON.
    async fn fetch_payment_intent(&self, payment_id: &str) -> Result<String, DataSourceError>;
}

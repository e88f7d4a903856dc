//! # Checkout Client
//!
//! reqwest adapter for the checkout backend. Implements the data source
//! ports from `checkout-types` and returns raw response bodies; mapping is
//! left to the repositories in `checkout-hex`.

use async_trait::async_trait;
use checkout_types::{DataSourceError, PaymentIntentDataSource, PaymentMethodsDataSource};
use reqwest::{Client, RequestBuilder, Url};

/// API version sent with every request unless overridden.
pub const DEFAULT_API_VERSION: &str = "2022-04-07";

/// HTTP data source for the checkout backend.
#[derive(Debug, Clone)]
pub struct CheckoutClient {
    base_url: String,
    api_version: String,
    http: Client,
}

impl CheckoutClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            http: Client::new(),
        }
    }

    /// Overrides the `version` header.
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Uses a preconfigured reqwest client (timeouts, proxies, TLS).
    pub fn with_http_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    /// Appends `segments` to the base URL. Each segment is percent-encoded,
    /// so an id containing `/`, `?` or `#` stays a single path segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, DataSourceError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| DataSourceError::Transport(format!("invalid base url: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| {
                DataSourceError::Transport(format!("base url cannot have a path: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn payment_methods_url(&self, customer_id: &str) -> Result<Url, DataSourceError> {
        self.endpoint(&["customers", "public", customer_id, "payment-methods"])
    }

    fn request(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.header("version", &self.api_version)
    }

    fn customer_request(&self, builder: RequestBuilder, customer_secret: &str) -> RequestBuilder {
        self.request(builder)
            .header("Authorization", format!("Basic {}", customer_secret))
    }

    async fn send(&self, req: RequestBuilder) -> Result<String, DataSourceError> {
        let resp = req.send().await.map_err(transport)?;
        let status = resp.status();
        if status.is_success() {
            resp.text().await.map_err(transport)
        } else {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or(body);
            tracing::debug!(status = status.as_u16(), %message, "Checkout API error");
            Err(DataSourceError::Backend {
                status: status.as_u16(),
                message,
            })
        }
    }
}

fn transport(err: reqwest::Error) -> DataSourceError {
    DataSourceError::Transport(err.to_string())
}

#[async_trait]
impl PaymentMethodsDataSource for CheckoutClient {
    async fn fetch_payment_methods(
        &self,
        customer_id: &str,
        customer_secret: &str,
    ) -> Result<String, DataSourceError> {
        let url = self.payment_methods_url(customer_id)?;
        let req = self.customer_request(self.http.get(url), customer_secret);
        self.send(req).await
    }

    async fn delete_payment_method(
        &self,
        customer_id: &str,
        customer_secret: &str,
        payment_method_id: &str,
    ) -> Result<(), DataSourceError> {
        let url = self.endpoint(&[
            "customers",
            "public",
            customer_id,
            "payment-methods",
            payment_method_id,
        ])?;
        let req = self.customer_request(self.http.delete(url), customer_secret);
        self.send(req).await.map(|_| ())
    }
}

#[async_trait]
impl PaymentIntentDataSource for CheckoutClient {
    async fn fetch_payment_intent(&self, payment_id: &str) -> Result<String, DataSourceError> {
        let url = self.endpoint(&["payment-intents", "public", payment_id])?;
        let req = self.request(self.http.get(url));
        self.send(req).await
    }
}

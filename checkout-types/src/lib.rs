//! # Checkout Types
//!
//! Wire payloads, domain entities and port traits for the checkout core.
//! This crate has ZERO IO dependencies - only data structures, outcome
//! enums, errors and trait definitions.
//!
//! ## Architecture
//!
//! - `domain/` - Validated domain entities (payment intent, saved methods)
//! - `dto/` - Raw payloads exactly as the backend sends them
//! - `ports/` - Data source traits that adapters must implement
//! - `error/` - Mapping, data source and fetch error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use currency_codes::CurrencyCode;
pub use domain::{
    Amount, BillingAddress, CardScheme, DeletePaymentMethodsResult, FetchPaymentMethodsResult,
    ItemLine, ItemLineAmount, PaymentIntentDomainEntity, PaymentIntentResult,
    PaymentIntentStatus, PaymentMethodsDomainEntity, SavedPaymentMethod, ShippingDetails,
    WalletScheme,
};
pub use dto::*;
pub use error::{DataSourceError, FetchError, InvalidPayload};
pub use ports::{PaymentIntentDataSource, PaymentMethodsDataSource};

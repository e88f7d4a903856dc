//! # Checkout Hex
//!
//! Application core of the checkout: payload mappers and repositories.
//!
//! ## Architecture
//!
//! - `mapper/` - Pure payload validation and transformation
//! - `repository/` - Data source round-trips, outcome translation and the
//!   latest-result holder
//!
//! Repositories are generic over the data source ports from
//! `checkout-types`, allowing different transports to be injected.

pub mod mapper;
pub mod repository;

#[cfg(test)]
mod mapper_tests;

pub use mapper::{PaymentIntentMapper, SupportedPaymentMethodsMapper};
pub use repository::{PaymentIntentRepository, PaymentMethodsRepository};

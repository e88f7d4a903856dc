//! Port traits (interfaces for adapters).
//!
//! The repositories depend on these traits, not on concrete transports.

mod data_source;

pub use data_source::{PaymentIntentDataSource, PaymentMethodsDataSource};

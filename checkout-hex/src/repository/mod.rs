//! Repositories (data source round-trips → outcomes).

mod latest;
mod payment_intent;
mod payment_methods;

pub use payment_intent::PaymentIntentRepository;
pub use payment_methods::PaymentMethodsRepository;

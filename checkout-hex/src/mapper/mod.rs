//! Payload mappers (raw backend payloads → domain entities).

mod payment_intent;
mod payment_methods;

pub use payment_intent::PaymentIntentMapper;
pub use payment_methods::SupportedPaymentMethodsMapper;

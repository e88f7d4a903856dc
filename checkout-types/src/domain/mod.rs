//! Domain models for the checkout.

pub mod amount;
pub mod outcome;
pub mod payment_intent;
pub mod payment_methods;
pub mod schemes;
pub mod status;

pub use amount::{Amount, ItemLineAmount};
pub use outcome::{DeletePaymentMethodsResult, FetchPaymentMethodsResult, PaymentIntentResult};
pub use payment_intent::{BillingAddress, ItemLine, PaymentIntentDomainEntity, ShippingDetails};
pub use payment_methods::{PaymentMethodsDomainEntity, SavedPaymentMethod};
pub use schemes::{CardScheme, WalletScheme};
pub use status::PaymentIntentStatus;

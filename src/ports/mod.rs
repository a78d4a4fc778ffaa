//! Ports - trait interfaces decoupling the application from infrastructure.

mod payment_provider;

pub use payment_provider::{
    CreatePaymentIntentRequest, PaymentError, PaymentErrorCode, PaymentIntent, PaymentProvider,
};

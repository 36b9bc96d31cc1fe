//! Payments module.
//!
//! Collects money for an order through a payment method. Cash and cheques are
//! always accepted; account-based methods go through a pluggable
//! [`PaymentGateway`].

pub mod gateway;
pub mod method;
pub mod processor;

pub use gateway::{ApprovingGateway, DecliningGateway, PaymentGateway};
pub use method::PaymentMethod;
pub use processor::{Payment, PaymentOutcome, PaymentProcessor};

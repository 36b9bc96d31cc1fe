//! Orders domain module.
//!
//! An [`Order`] is charged through the payment processor, shipped, and
//! printed as a report. Which product it is for, and how many units it may
//! hold, is decided by its [`OrderPolicy`].

pub mod order;
pub mod policy;
pub mod storefront;

pub use order::{
    MarkShipped, Order, OrderCharged, OrderCommand, OrderEvent, OrderShipped, OrderStatus,
    PaymentFailed, RecordPayment,
};
pub use policy::OrderPolicy;
pub use storefront::Storefront;

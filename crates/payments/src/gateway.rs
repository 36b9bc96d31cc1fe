use storefront_core::Money;

use crate::method::PaymentMethod;

/// External account charge (PayPal, Stripe).
///
/// Returns whether the account was charged. A decline is a normal business
/// outcome, so there is no error channel.
pub trait PaymentGateway: Send + Sync {
    fn charge_account(&self, method: PaymentMethod, amount: Money) -> bool;
}

/// Accepts every charge. Stands in for a sandbox account.
#[derive(Debug, Default, Clone, Copy)]
pub struct ApprovingGateway;

impl PaymentGateway for ApprovingGateway {
    fn charge_account(&self, method: PaymentMethod, amount: Money) -> bool {
        tracing::debug!(%method, %amount, "gateway approved charge");
        true
    }
}

/// Declines every charge.
#[derive(Debug, Default, Clone, Copy)]
pub struct DecliningGateway;

impl PaymentGateway for DecliningGateway {
    fn charge_account(&self, method: PaymentMethod, amount: Money) -> bool {
        tracing::debug!(%method, %amount, "gateway declined charge");
        false
    }
}

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use storefront_core::{DomainResult, Money, ValueObject};
use storefront_notifications::Notifier;

use crate::gateway::PaymentGateway;
use crate::method::PaymentMethod;

/// Result of a charge attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentOutcome {
    Charged,
    Failed,
}

/// A single charge attempt: method and amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub method: PaymentMethod,
    pub amount: Money,
}

impl ValueObject for Payment {}

/// Collects payments and sends the matching receipt or failure notice.
///
/// One synchronous call per charge: no retries, no idempotency keys, nothing
/// persisted.
#[derive(Clone)]
pub struct PaymentProcessor {
    gateway: Arc<dyn PaymentGateway>,
    notifier: Arc<dyn Notifier>,
}

impl PaymentProcessor {
    pub fn new(gateway: Arc<dyn PaymentGateway>, notifier: Arc<dyn Notifier>) -> Self {
        Self { gateway, notifier }
    }

    pub fn process(&self, method: PaymentMethod, amount: Money) -> DomainResult<PaymentOutcome> {
        self.process_payment(&Payment { method, amount })
    }

    pub fn process_payment(&self, payment: &Payment) -> DomainResult<PaymentOutcome> {
        let outcome = match payment.method {
            PaymentMethod::Cash | PaymentMethod::Cheque => PaymentOutcome::Charged,
            PaymentMethod::Paypal | PaymentMethod::Stripe => {
                if self.gateway.charge_account(payment.method, payment.amount) {
                    PaymentOutcome::Charged
                } else {
                    PaymentOutcome::Failed
                }
            }
        };

        match outcome {
            PaymentOutcome::Charged => self.notifier.send_receipt(payment.amount),
            PaymentOutcome::Failed => self.notifier.send_payment_failure(payment.amount),
        }

        tracing::info!(
            method = %payment.method,
            amount = %payment.amount,
            ?outcome,
            "payment processed"
        );

        Ok(outcome)
    }
}

impl core::fmt::Debug for PaymentProcessor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PaymentProcessor").finish_non_exhaustive()
    }
}

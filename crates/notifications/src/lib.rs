//! Customer-facing side effects: receipts, failure emails, download links and
//! printed labels/tickets.
//!
//! The domain fires these and never consumes a result. Delivery itself (SMTP,
//! printers) lives outside the workspace; [`TracingNotifier`] logs what would
//! be sent and [`RecordingNotifier`] keeps it in memory.

use std::sync::{Mutex, PoisonError};

use serde::{Deserialize, Serialize};

use storefront_core::{Money, OrderNumber};

/// A single notification side effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notification {
    Receipt { amount: Money },
    PaymentFailure { amount: Money },
    DownloadLink { order_number: OrderNumber },
    ShippingLabel { order_number: OrderNumber },
    Ticket { order_number: OrderNumber },
}

/// Notification sender capability.
///
/// All operations are fire-and-forget.
pub trait Notifier: Send + Sync {
    fn send_receipt(&self, amount: Money);

    fn send_payment_failure(&self, amount: Money);

    fn send_download_link(&self, order_number: OrderNumber);

    fn print_shipping_label(&self, order_number: OrderNumber);

    fn print_ticket(&self, order_number: OrderNumber);
}

/// Logs every notification through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn send_receipt(&self, amount: Money) {
        tracing::info!(%amount, "sending email receipt");
    }

    fn send_payment_failure(&self, amount: Money) {
        tracing::warn!(%amount, "sending payment failure email");
    }

    fn send_download_link(&self, order_number: OrderNumber) {
        tracing::info!(%order_number, "sending download link");
    }

    fn print_shipping_label(&self, order_number: OrderNumber) {
        tracing::info!(%order_number, "printing shipping label");
    }

    fn print_ticket(&self, order_number: OrderNumber) {
        tracing::info!(%order_number, "printing conference ticket");
    }
}

/// Keeps every notification in memory, in the order they were fired.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything sent so far.
    pub fn sent(&self) -> Vec<Notification> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn clear(&self) {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn record(&self, notification: Notification) {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}

impl Notifier for RecordingNotifier {
    fn send_receipt(&self, amount: Money) {
        self.record(Notification::Receipt { amount });
    }

    fn send_payment_failure(&self, amount: Money) {
        self.record(Notification::PaymentFailure { amount });
    }

    fn send_download_link(&self, order_number: OrderNumber) {
        self.record(Notification::DownloadLink { order_number });
    }

    fn print_shipping_label(&self, order_number: OrderNumber) {
        self.record(Notification::ShippingLabel { order_number });
    }

    fn print_ticket(&self, order_number: OrderNumber) {
        self.record(Notification::Ticket { order_number });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn recording_notifier_keeps_order_of_calls() {
        let notifier = RecordingNotifier::new();
        notifier.print_ticket(OrderNumber::new(3));
        notifier.print_shipping_label(OrderNumber::new(3));
        notifier.send_receipt(Money::new(dec!(300)));

        assert_eq!(
            notifier.sent(),
            vec![
                Notification::Ticket { order_number: OrderNumber::new(3) },
                Notification::ShippingLabel { order_number: OrderNumber::new(3) },
                Notification::Receipt { amount: Money::new(dec!(300)) },
            ]
        );
    }

    #[test]
    fn clear_forgets_previous_notifications() {
        let notifier = RecordingNotifier::new();
        notifier.send_payment_failure(Money::new(dec!(19.90)));
        notifier.clear();
        assert!(notifier.sent().is_empty());
    }

    #[test]
    fn tracing_notifier_is_usable_as_trait_object() {
        let notifier: Box<dyn Notifier> = Box::new(TracingNotifier);
        notifier.send_download_link(OrderNumber::new(2));
    }
}

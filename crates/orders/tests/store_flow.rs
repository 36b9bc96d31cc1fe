//! End-to-end order flows: charge, ship, report.

use std::sync::Arc;

use rust_decimal_macros::dec;

use storefront_catalog::ProductCatalog;
use storefront_core::{DomainError, Money, OrderNumber};
use storefront_notifications::{Notification, RecordingNotifier};
use storefront_orders::{Order, OrderStatus, Storefront};
use storefront_payments::{ApprovingGateway, PaymentMethod};

fn storefront() -> (Storefront, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::new());
    let store = Storefront::new(
        Arc::new(ProductCatalog::standard()),
        Arc::new(ApprovingGateway),
        notifier.clone(),
    );
    (store, notifier)
}

fn address(street: &str) -> Vec<String> {
    vec![street.to_string(), "New York, NY 12345".to_string()]
}

#[test]
fn physical_book_order_report() {
    let (store, _) = storefront();
    let order = Order::new(OrderNumber::new(12345), 5, address("1234 Main St."), "print").unwrap();

    assert_eq!(order.total(store.catalog()).unwrap(), Money::new(dec!(79.70)));

    let expected = "Order #12345\n\
                    Ship to: 1234 Main St., New York, NY 12345\n\
                    -----\n\
                    \n\
                    Qty   | Item Name                       | Total\n\
                    ------|---------------------------------|------\n\
                    5     | Book                            | $79.70";
    assert_eq!(order.render_report(&store).unwrap(), expected);
}

#[test]
fn ebook_order_has_free_shipping() {
    let (store, notifier) = storefront();
    let mut order = Order::new(OrderNumber::new(2), 5, address("1234 Main St."), "ebook").unwrap();

    assert!(order.shipping_cost(store.catalog()).unwrap().is_zero());
    assert_eq!(order.total(store.catalog()).unwrap(), Money::new(dec!(74.75)));

    order.charge(&store, PaymentMethod::Paypal).unwrap();
    assert_eq!(order.status(), OrderStatus::Charged);

    order.ship(&store).unwrap();
    assert_eq!(order.status(), OrderStatus::Shipped);

    assert_eq!(
        notifier.sent(),
        vec![
            Notification::Receipt { amount: Money::new(dec!(74.75)) },
            Notification::DownloadLink { order_number: OrderNumber::new(2) },
        ]
    );
}

#[test]
fn conference_ticket_order_is_charged_and_reported() {
    for method in PaymentMethod::ALL {
        let (store, _) = storefront();
        let mut order =
            Order::conference_ticket(OrderNumber::new(12345), 1, address("1234 Test St.")).unwrap();

        order.charge(&store, method).unwrap();
        assert_eq!(order.status(), OrderStatus::Charged);
        assert_eq!(order.total(store.catalog()).unwrap(), Money::new(dec!(300.00)));

        let expected = "Order #12345\n\
                        Ship to: 1234 Test St., New York, NY 12345\n\
                        -----\n\
                        \n\
                        Qty   | Item Name                       | Total\n\
                        ------|---------------------------------|------\n\
                        1     | Conference Ticket               | $300.00";
        assert_eq!(order.render_report(&store).unwrap(), expected);
    }
}

#[test]
fn conference_ticket_order_rejects_multiple_tickets() {
    let err = Order::conference_ticket(OrderNumber::new(1337), 3, address("456 Test St."))
        .unwrap_err();

    assert_eq!(
        err,
        DomainError::InvalidQuantity("Conference tickets are limited to one per customer".to_string())
    );
    assert_eq!(err.to_string(), "Conference tickets are limited to one per customer");
}

#[test]
fn report_rendering_is_repeatable() {
    let (store, _) = storefront();
    let mut order = Order::new(OrderNumber::new(1), 2, address("1 Any St."), "print").unwrap();

    let before = order.render_report(&store).unwrap();
    let again = order.render_report(&store).unwrap();
    assert_eq!(before, again);

    // Status changes do not affect the report.
    order.charge(&store, PaymentMethod::Cash).unwrap();
    order.ship(&store).unwrap();
    assert_eq!(order.render_report(&store).unwrap(), before);
}

#[test]
fn unsupported_payment_method_is_rejected_before_charging() {
    let err = "bitcoin".parse::<PaymentMethod>().unwrap_err();
    assert_eq!(err, DomainError::UnsupportedPaymentMethod("bitcoin".to_string()));
}

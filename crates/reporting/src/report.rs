use serde::{Deserialize, Serialize};

use storefront_catalog::{ProductCatalog, ProductType};
use storefront_core::{DomainResult, Money, OrderNumber, ValueObject};

const QTY_WIDTH: usize = 6;
const LABEL_WIDTH: usize = 17;
const LABEL_GAP: &str = "               ";

/// Snapshot of the order fields that appear on a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderReport {
    pub address: Vec<String>,
    pub quantity: u32,
    pub total: Money,
    pub order_number: OrderNumber,
    pub product_type: ProductType,
}

impl ValueObject for OrderReport {}

impl OrderReport {
    pub fn new(
        address: Vec<String>,
        quantity: u32,
        total: Money,
        order_number: OrderNumber,
        product_type: ProductType,
    ) -> Self {
        Self {
            address,
            quantity,
            total,
            order_number,
            product_type,
        }
    }

    /// Address lines joined for a single "Ship to" line.
    pub fn mailing_address(&self) -> String {
        self.address.join(", ")
    }

    /// Fixed-width text table, e.g.
    ///
    /// ```text
    /// Order #12345
    /// Ship to: 1234 Main St., New York, NY 12345
    /// -----
    ///
    /// Qty   | Item Name                       | Total
    /// ------|---------------------------------|------
    /// 5     | Book                            | $79.70
    /// ```
    ///
    /// Fails with `UnknownProductType` if the catalog has no label for the
    /// product type.
    pub fn render_text(&self, catalog: &ProductCatalog) -> DomainResult<String> {
        let label = catalog.label_of(self.product_type.as_str())?;

        Ok(format!(
            "Order #{number}\n\
             Ship to: {address}\n\
             -----\n\
             \n\
             Qty   | Item Name                       | Total\n\
             ------|---------------------------------|------\n\
             {qty:<QTY_WIDTH$}| {label:<LABEL_WIDTH$}{LABEL_GAP}| ${total}",
            number = self.order_number,
            address = self.mailing_address(),
            qty = self.quantity,
            total = self.total.to_two_decimals(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn address(street: &str) -> Vec<String> {
        vec![street.to_string(), "New York, NY 12345".to_string()]
    }

    #[test]
    fn renders_conference_ticket_report() {
        let report = OrderReport::new(
            address("456 Test St."),
            1,
            Money::new(dec!(300)),
            OrderNumber::new(12345),
            ProductType::conference_ticket(),
        );

        let expected = "Order #12345\n\
                        Ship to: 456 Test St., New York, NY 12345\n\
                        -----\n\
                        \n\
                        Qty   | Item Name                       | Total\n\
                        ------|---------------------------------|------\n\
                        1     | Conference Ticket               | $300.00";

        assert_eq!(report.render_text(&ProductCatalog::standard()).unwrap(), expected);
    }

    #[test]
    fn renders_book_report() {
        let report = OrderReport::new(
            address("1234 Main St."),
            5,
            Money::new(dec!(79.70)),
            OrderNumber::new(12345),
            ProductType::print(),
        );

        let rendered = report.render_text(&ProductCatalog::standard()).unwrap();
        assert!(rendered.ends_with("5     | Book                            | $79.70"));
        assert!(rendered.contains("Ship to: 1234 Main St., New York, NY 12345\n"));
    }

    #[test]
    fn ebook_label_is_padded_to_column_width() {
        let report = OrderReport::new(
            address("1 Any St."),
            2,
            Money::new(dec!(29.9)),
            OrderNumber::new(2),
            ProductType::ebook(),
        );

        let rendered = report.render_text(&ProductCatalog::standard()).unwrap();
        let last = rendered.lines().last().unwrap();
        assert_eq!(last, "2     | eBook                           | $29.90");
    }

    #[test]
    fn unknown_product_type_cannot_be_rendered() {
        let report = OrderReport::new(
            address("1 Any St."),
            1,
            Money::ZERO,
            OrderNumber::new(1),
            ProductType::new("seminar"),
        );

        let err = report.render_text(&ProductCatalog::standard()).unwrap_err();
        assert_eq!(
            err,
            storefront_core::DomainError::UnknownProductType("seminar".to_string())
        );
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;
        use rust_decimal::Decimal;

        proptest! {
            /// Property: rendering is pure; same snapshot, same text.
            #[test]
            fn rendering_is_idempotent(
                number in 0u64..1_000_000,
                quantity in 1u32..100,
                cents in 0i64..10_000_000,
                street in "[A-Za-z0-9 .]{1,30}",
                kind in 0usize..3,
            ) {
                let product_type = [ProductType::print(), ProductType::ebook(), ProductType::conference_ticket()][kind].clone();
                let report = OrderReport::new(
                    vec![street, "New York, NY 12345".to_string()],
                    quantity,
                    Money::new(Decimal::new(cents, 2)),
                    OrderNumber::new(number),
                    product_type,
                );
                let catalog = ProductCatalog::standard();
                let first = report.render_text(&catalog).unwrap();
                let second = report.render_text(&catalog).unwrap();
                prop_assert_eq!(&first, &second);
                let total_suffix = format!("| ${}", Money::new(Decimal::new(cents, 2)).to_two_decimals());
                prop_assert!(first.ends_with(&total_suffix));
            }
        }
    }
}

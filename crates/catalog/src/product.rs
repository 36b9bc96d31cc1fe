use core::borrow::Borrow;

use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Money, ValueObject};

/// Product type key (e.g. `"print"`, `"ebook"`, `"conference ticket"`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductType(String);

impl ProductType {
    /// Physical (printed) book.
    pub const PRINT: &'static str = "print";
    /// Electronic book, delivered by download link.
    pub const EBOOK: &'static str = "ebook";
    /// Ticket to the conference.
    pub const CONFERENCE_TICKET: &'static str = "conference ticket";

    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn print() -> Self {
        Self::new(Self::PRINT)
    }

    pub fn ebook() -> Self {
        Self::new(Self::EBOOK)
    }

    pub fn conference_ticket() -> Self {
        Self::new(Self::CONFERENCE_TICKET)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ProductType {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductType {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl core::fmt::Display for ProductType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// How an order for the product is fulfilled once it ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fulfillment {
    /// Email a download link.
    Download,
    /// Print a shipping label.
    Shipment,
    /// Print the ticket, then a shipping label.
    Ticket,
}

/// Catalog entry: pricing and fulfillment for one product type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub(crate) product_type: ProductType,
    pub(crate) label: String,
    pub(crate) unit_price: Money,
    pub(crate) shipping_cost: Money,
    pub(crate) fulfillment: Fulfillment,
}

impl Product {
    pub fn new(
        product_type: impl Into<ProductType>,
        label: impl Into<String>,
        unit_price: Money,
        shipping_cost: Money,
        fulfillment: Fulfillment,
    ) -> DomainResult<Self> {
        let product_type = product_type.into();
        let label = label.into();

        if product_type.as_str().trim().is_empty() {
            return Err(DomainError::validation("product type cannot be empty"));
        }

        if label.trim().is_empty() {
            return Err(DomainError::validation("label cannot be empty"));
        }

        if unit_price < Money::ZERO || shipping_cost < Money::ZERO {
            return Err(DomainError::validation("prices cannot be negative"));
        }

        Ok(Self {
            product_type,
            label,
            unit_price,
            shipping_cost,
            fulfillment,
        })
    }

    pub fn product_type(&self) -> &ProductType {
        &self.product_type
    }

    /// Printable name used on order reports.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn shipping_cost(&self) -> Money {
        self.shipping_cost
    }

    pub fn fulfillment(&self) -> Fulfillment {
        self.fulfillment
    }

    /// Shipping plus `quantity` units.
    pub fn total_for(&self, quantity: u32) -> Money {
        self.shipping_cost + self.unit_price.times(quantity)
    }
}

impl ValueObject for Product {}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn seminar() -> DomainResult<Product> {
        Product::new(
            "seminar",
            "Seminar",
            Money::new(dec!(99.00)),
            Money::ZERO,
            Fulfillment::Ticket,
        )
    }

    #[test]
    fn new_product_keeps_its_fields() {
        let product = seminar().unwrap();
        assert_eq!(product.product_type().as_str(), "seminar");
        assert_eq!(product.label(), "Seminar");
        assert_eq!(product.unit_price(), Money::new(dec!(99.00)));
        assert!(product.shipping_cost().is_zero());
        assert_eq!(product.fulfillment(), Fulfillment::Ticket);
    }

    #[test]
    fn rejects_empty_label() {
        let err = Product::new("seminar", "  ", Money::ZERO, Money::ZERO, Fulfillment::Ticket)
            .unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for empty label"),
        }
    }

    #[test]
    fn rejects_negative_price() {
        let err = Product::new(
            "seminar",
            "Seminar",
            Money::new(dec!(-1)),
            Money::ZERO,
            Fulfillment::Ticket,
        )
        .unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("negative") => {}
            _ => panic!("Expected Validation error for negative price"),
        }
    }

    #[test]
    fn total_adds_shipping_once() {
        let book = Product::new(
            ProductType::print(),
            "Book",
            Money::new(dec!(14.95)),
            Money::new(dec!(4.95)),
            Fulfillment::Shipment,
        )
        .unwrap();
        assert_eq!(book.total_for(5), Money::new(dec!(79.70)));
        assert_eq!(book.total_for(1), Money::new(dec!(19.90)));
    }
}

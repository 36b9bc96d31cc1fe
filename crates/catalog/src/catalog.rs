use std::collections::BTreeMap;

use rust_decimal::Decimal;

use storefront_core::{DomainError, DomainResult, Money};

use crate::product::{Fulfillment, Product, ProductType};

/// Read-only registry of products keyed by product type.
///
/// Built once (see [`ProductCatalog::standard`] or [`ProductCatalog::builder`])
/// and never mutated afterwards, so it can be shared behind an `Arc` across
/// any number of orders without locking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductCatalog {
    products: BTreeMap<ProductType, Product>,
}

impl ProductCatalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// The store's fixed reference data: physical book, ebook, conference ticket.
    pub fn standard() -> Self {
        let products = standard_products()
            .into_iter()
            .map(|p| (p.product_type().clone(), p))
            .collect();
        Self { products }
    }

    /// Look up a product by its type key.
    pub fn get(&self, product_type: &str) -> DomainResult<&Product> {
        self.products.get(product_type).ok_or_else(|| {
            tracing::debug!(product_type, "product type not in catalog");
            DomainError::unknown_product_type(product_type)
        })
    }

    pub fn price_of(&self, product_type: &str) -> DomainResult<Money> {
        self.get(product_type).map(Product::unit_price)
    }

    pub fn shipping_of(&self, product_type: &str) -> DomainResult<Money> {
        self.get(product_type).map(Product::shipping_cost)
    }

    /// Printable label for reports (e.g. `"print"` → `"Book"`).
    pub fn label_of(&self, product_type: &str) -> DomainResult<&str> {
        self.get(product_type).map(Product::label)
    }

    pub fn contains(&self, product_type: &str) -> bool {
        self.products.contains_key(product_type)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }
}

/// Builder for catalogs with additional product types (software, seminars, ...).
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    products: BTreeMap<ProductType, Product>,
}

impl CatalogBuilder {
    /// Add the standard reference data. Fails if any of its product types
    /// is already registered.
    pub fn with_standard_products(self) -> DomainResult<Self> {
        standard_products()
            .into_iter()
            .try_fold(self, |builder, product| builder.register(product))
    }

    /// Register a product. Each product type may be registered only once.
    pub fn register(mut self, product: Product) -> DomainResult<Self> {
        let key = product.product_type().clone();
        if self.products.contains_key(&key) {
            return Err(DomainError::validation(format!(
                "product type already registered: {key}"
            )));
        }
        self.products.insert(key, product);
        Ok(self)
    }

    pub fn build(self) -> ProductCatalog {
        ProductCatalog {
            products: self.products,
        }
    }
}

fn standard_products() -> [Product; 3] {
    let book_price = Money::new(Decimal::new(1495, 2));
    [
        Product {
            product_type: ProductType::print(),
            label: "Book".to_string(),
            unit_price: book_price,
            shipping_cost: Money::new(Decimal::new(495, 2)),
            fulfillment: Fulfillment::Shipment,
        },
        Product {
            product_type: ProductType::ebook(),
            label: "eBook".to_string(),
            unit_price: book_price,
            shipping_cost: Money::ZERO,
            fulfillment: Fulfillment::Download,
        },
        Product {
            product_type: ProductType::conference_ticket(),
            label: "Conference Ticket".to_string(),
            unit_price: Money::new(Decimal::new(30000, 2)),
            shipping_cost: Money::ZERO,
            fulfillment: Fulfillment::Ticket,
        },
    ]
}

//! Product catalog module.
//!
//! Products are immutable data records looked up by their type key. The
//! catalog is built once and then shared read-only by every order.

pub mod catalog;
pub mod product;

pub use catalog::{CatalogBuilder, ProductCatalog};
pub use product::{Fulfillment, Product, ProductType};

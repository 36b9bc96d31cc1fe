//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. `Money`, a
/// catalog `Product` record and an `OrderReport` snapshot are value objects;
/// an `Order` is not (it has an order number and a lifecycle).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. A payment
/// gateway declining a charge is a business outcome, not an error, and never
/// shows up here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// The requested quantity is not allowed for this kind of order.
    ///
    /// The message is shown to customers as-is.
    #[error("{0}")]
    InvalidQuantity(String),

    /// The product type key is not registered in the catalog.
    #[error("unknown product type: {0}")]
    UnknownProductType(String),

    /// The payment method is not one the store accepts.
    #[error("unsupported payment method: {0}")]
    UnsupportedPaymentMethod(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn invalid_quantity(msg: impl Into<String>) -> Self {
        Self::InvalidQuantity(msg.into())
    }

    pub fn unknown_product_type(key: impl Into<String>) -> Self {
        Self::UnknownProductType(key.into())
    }

    pub fn unsupported_payment_method(method: impl Into<String>) -> Self {
        Self::UnsupportedPaymentMethod(method.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_quantity_displays_message_verbatim() {
        let err = DomainError::invalid_quantity("Conference tickets are limited to one per customer");
        assert_eq!(err.to_string(), "Conference tickets are limited to one per customer");
    }

    #[test]
    fn unknown_product_type_names_the_key() {
        let err = DomainError::unknown_product_type("seminar");
        assert_eq!(err.to_string(), "unknown product type: seminar");
    }
}

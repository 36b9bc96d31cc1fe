use serde::{Deserialize, Serialize};

use storefront_catalog::ProductType;
use storefront_core::{DomainError, DomainResult};

/// What an order is for and how many units it may hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OrderPolicy {
    /// Any catalog product, at least one unit.
    Standard { product_type: ProductType },
    /// A single conference ticket per customer.
    ConferenceTicket,
}

impl OrderPolicy {
    pub const CONFERENCE_TICKET_LIMIT: &'static str =
        "Conference tickets are limited to one per customer";

    pub fn standard(product_type: impl Into<ProductType>) -> Self {
        Self::Standard {
            product_type: product_type.into(),
        }
    }

    /// Catalog key of the product being ordered.
    pub fn product_type(&self) -> &str {
        match self {
            OrderPolicy::Standard { product_type } => product_type.as_str(),
            OrderPolicy::ConferenceTicket => ProductType::CONFERENCE_TICKET,
        }
    }

    pub fn check_quantity(&self, quantity: u32) -> DomainResult<()> {
        match self {
            OrderPolicy::Standard { .. } if quantity == 0 => Err(DomainError::invalid_quantity(
                "Orders must contain at least one item",
            )),
            OrderPolicy::Standard { .. } => Ok(()),
            OrderPolicy::ConferenceTicket if quantity != 1 => {
                Err(DomainError::invalid_quantity(Self::CONFERENCE_TICKET_LIMIT))
            }
            OrderPolicy::ConferenceTicket => Ok(()),
        }
    }
}

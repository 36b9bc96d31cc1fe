use core::str::FromStr;

use serde::{Deserialize, Serialize};

use storefront_core::DomainError;

/// Payment methods accepted by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Cheque,
    Paypal,
    Stripe,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Cash,
        PaymentMethod::Cheque,
        PaymentMethod::Paypal,
        PaymentMethod::Stripe,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Cheque => "cheque",
            PaymentMethod::Paypal => "paypal",
            PaymentMethod::Stripe => "stripe",
        }
    }

    /// Whether the charge has to go through an external account.
    pub fn requires_gateway(&self) -> bool {
        matches!(self, PaymentMethod::Paypal | PaymentMethod::Stripe)
    }
}

impl core::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cash" => Ok(PaymentMethod::Cash),
            "cheque" => Ok(PaymentMethod::Cheque),
            "paypal" => Ok(PaymentMethod::Paypal),
            "stripe" => Ok(PaymentMethod::Stripe),
            _ => Err(DomainError::unsupported_payment_method(s)),
        }
    }
}

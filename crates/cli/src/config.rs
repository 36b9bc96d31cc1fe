//! Configuration from environment variables (and an optional `.env` file).

use core::str::FromStr;

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};

use storefront_core::OrderNumber;
use storefront_observability::{LogConfig, LogFormat};

/// Which sandbox gateway answers PayPal/Stripe charges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GatewayMode {
    #[default]
    Approve,
    Decline,
}

impl FromStr for GatewayMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "approve" => Ok(GatewayMode::Approve),
            "decline" => Ok(GatewayMode::Decline),
            other => bail!("unknown gateway mode: {other} (expected \"approve\" or \"decline\")"),
        }
    }
}

/// What gets printed on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The order report.
    #[default]
    Text,
    /// A JSON summary including the report.
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => bail!("unknown output format: {other} (expected \"text\" or \"json\")"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub log: LogConfig,
    pub gateway: GatewayMode,
    pub output: OutputFormat,
    pub order_number: OrderNumber,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            log: LogConfig::default(),
            gateway: GatewayMode::default(),
            output: OutputFormat::default(),
            order_number: OrderNumber::new(12345),
        }
    }
}

impl StoreConfig {
    /// Load `.env` if present, then read `STOREFRONT_*` variables.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key/value source. Unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup("STOREFRONT_LOG_FORMAT") {
            config.log.format = raw
                .parse::<LogFormat>()
                .context("invalid STOREFRONT_LOG_FORMAT")?;
        }
        if let Some(raw) = lookup("STOREFRONT_GATEWAY") {
            config.gateway = raw.parse::<GatewayMode>().context("invalid STOREFRONT_GATEWAY")?;
        }
        if let Some(raw) = lookup("STOREFRONT_OUTPUT") {
            config.output = raw.parse::<OutputFormat>().context("invalid STOREFRONT_OUTPUT")?;
        }
        if let Some(raw) = lookup("STOREFRONT_ORDER_NUMBER") {
            config.order_number = raw
                .parse::<OrderNumber>()
                .context("invalid STOREFRONT_ORDER_NUMBER")?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = StoreConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.order_number, OrderNumber::new(12345));
        assert_eq!(config.gateway, GatewayMode::Approve);
    }

    #[test]
    fn reads_every_variable() {
        let config = StoreConfig::from_lookup(lookup(&[
            ("STOREFRONT_LOG_FORMAT", "json"),
            ("STOREFRONT_GATEWAY", "decline"),
            ("STOREFRONT_OUTPUT", "JSON"),
            ("STOREFRONT_ORDER_NUMBER", "42"),
        ]))
        .unwrap();

        assert_eq!(config.log.format, LogFormat::Json);
        assert_eq!(config.gateway, GatewayMode::Decline);
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.order_number, OrderNumber::new(42));
    }

    #[test]
    fn invalid_values_name_the_variable() {
        let err = StoreConfig::from_lookup(lookup(&[("STOREFRONT_GATEWAY", "maybe")])).unwrap_err();
        assert!(err.to_string().contains("STOREFRONT_GATEWAY"));

        let err =
            StoreConfig::from_lookup(lookup(&[("STOREFRONT_ORDER_NUMBER", "abc")])).unwrap_err();
        assert!(err.to_string().contains("STOREFRONT_ORDER_NUMBER"));
    }
}

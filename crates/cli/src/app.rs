//! One order, start to finish.

use std::sync::Arc;

use anyhow::{Context, bail};
use serde::Serialize;

use storefront_catalog::{ProductCatalog, ProductType};
use storefront_core::{Money, OrderNumber};
use storefront_notifications::Notifier;
use storefront_orders::{Order, OrderStatus, Storefront};
use storefront_payments::{
    ApprovingGateway, DecliningGateway, PaymentGateway, PaymentMethod, PaymentOutcome,
};

use crate::config::{GatewayMode, OutputFormat, StoreConfig};

const USAGE: &str =
    "usage: storefront <product-type> <quantity> <payment-method> [address line]...";

/// What the customer asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    pub product_type: String,
    pub quantity: u32,
    pub method: PaymentMethod,
    pub address: Vec<String>,
}

impl OrderRequest {
    /// Positional arguments: product type, quantity, payment method, then
    /// any number of address lines.
    pub fn from_args<I>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();

        let Some(product_type) = args.next() else {
            bail!(USAGE);
        };
        let Some(quantity) = args.next() else {
            bail!(USAGE);
        };
        let Some(method) = args.next() else {
            bail!(USAGE);
        };

        let quantity = quantity
            .trim()
            .parse::<u32>()
            .with_context(|| format!("invalid quantity: {quantity}"))?;
        let method = method.parse::<PaymentMethod>()?;
        let address: Vec<String> = args.collect();

        Ok(Self {
            product_type,
            quantity,
            method,
            address,
        })
    }
}

/// Result of running an order through the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub order_number: OrderNumber,
    pub product_type: String,
    pub quantity: u32,
    pub total: Money,
    pub payment_method: PaymentMethod,
    pub outcome: PaymentOutcome,
    pub status: OrderStatus,
    pub report: String,
}

fn gateway(mode: GatewayMode) -> Arc<dyn PaymentGateway> {
    match mode {
        GatewayMode::Approve => Arc::new(ApprovingGateway),
        GatewayMode::Decline => Arc::new(DecliningGateway),
    }
}

/// Charge, ship and report on the requested order.
pub fn run(
    config: &StoreConfig,
    request: &OrderRequest,
    notifier: Arc<dyn Notifier>,
) -> anyhow::Result<OrderSummary> {
    let store = Storefront::new(
        Arc::new(ProductCatalog::standard()),
        gateway(config.gateway),
        notifier,
    );

    let mut order = if request.product_type == ProductType::CONFERENCE_TICKET {
        Order::conference_ticket(config.order_number, request.quantity, request.address.clone())?
    } else {
        Order::new(
            config.order_number,
            request.quantity,
            request.address.clone(),
            request.product_type.as_str(),
        )?
    };

    let outcome = order.charge(&store, request.method)?;
    order.ship(&store)?;
    let report = order.render_report(&store)?;

    Ok(OrderSummary {
        order_number: order.number(),
        product_type: order.product_type().to_string(),
        quantity: order.quantity(),
        total: order.total(store.catalog())?,
        payment_method: request.method,
        outcome,
        status: order.status(),
        report,
    })
}

/// Format the summary for stdout.
pub fn render(summary: &OrderSummary, output: OutputFormat) -> anyhow::Result<String> {
    match output {
        OutputFormat::Text => Ok(summary.report.clone()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(summary).context("failed to serialize order summary")
        }
    }
}

use std::sync::Arc;

use anyhow::Context;

use storefront_cli::app::{self, OrderRequest};
use storefront_cli::config::StoreConfig;
use storefront_notifications::TracingNotifier;

fn main() -> anyhow::Result<()> {
    let config = StoreConfig::from_env().context("failed to load configuration")?;
    storefront_observability::init(&config.log);
    tracing::debug!(?config, "configuration loaded");

    let request = OrderRequest::from_args(std::env::args().skip(1))?;
    tracing::debug!(?request, "order request parsed");

    let summary = app::run(&config, &request, Arc::new(TracingNotifier))?;
    println!("{}", app::render(&summary, config.output)?);

    Ok(())
}

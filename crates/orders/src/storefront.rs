use std::sync::Arc;

use storefront_catalog::ProductCatalog;
use storefront_notifications::Notifier;
use storefront_payments::{PaymentGateway, PaymentProcessor};
use storefront_reporting::ReportRenderers;

/// Collaborators an order needs to be charged, shipped and reported on.
///
/// Cheap to clone; the catalog is shared read-only.
#[derive(Clone)]
pub struct Storefront {
    catalog: Arc<ProductCatalog>,
    payments: PaymentProcessor,
    notifier: Arc<dyn Notifier>,
    renderers: ReportRenderers,
}

impl Storefront {
    pub fn new(
        catalog: Arc<ProductCatalog>,
        gateway: Arc<dyn PaymentGateway>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            catalog,
            payments: PaymentProcessor::new(gateway, notifier.clone()),
            notifier,
            renderers: ReportRenderers::standard(),
        }
    }

    pub fn with_renderers(mut self, renderers: ReportRenderers) -> Self {
        self.renderers = renderers;
        self
    }

    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    pub fn payments(&self) -> &PaymentProcessor {
        &self.payments
    }

    pub fn notifier(&self) -> &dyn Notifier {
        self.notifier.as_ref()
    }

    pub fn renderers(&self) -> &ReportRenderers {
        &self.renderers
    }
}

impl core::fmt::Debug for Storefront {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Storefront")
            .field("catalog", &self.catalog)
            .field("payments", &self.payments)
            .field("renderers", &self.renderers)
            .finish_non_exhaustive()
    }
}

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use storefront_catalog::ProductCatalog;
use storefront_core::{DomainError, DomainResult};

use crate::report::OrderReport;

/// Output formats a report can be generated as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ReportFormat {
    Text,
}

impl core::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ReportFormat::Text => f.write_str("text"),
        }
    }
}

/// Turns a report snapshot into a document of one format.
pub trait ReportRenderer: Send + Sync {
    fn render(&self, report: &OrderReport, catalog: &ProductCatalog) -> DomainResult<String>;
}

/// The fixed-width text table.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextRenderer;

impl ReportRenderer for TextRenderer {
    fn render(&self, report: &OrderReport, catalog: &ProductCatalog) -> DomainResult<String> {
        report.render_text(catalog)
    }
}

/// Registry of renderers keyed by format.
#[derive(Clone, Default)]
pub struct ReportRenderers {
    renderers: HashMap<ReportFormat, Arc<dyn ReportRenderer>>,
}

impl ReportRenderers {
    /// Registry with no formats at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry with every built-in format.
    pub fn standard() -> Self {
        Self::empty().with(ReportFormat::Text, Arc::new(TextRenderer))
    }

    /// Register (or replace) the renderer for `format`.
    pub fn with(mut self, format: ReportFormat, renderer: Arc<dyn ReportRenderer>) -> Self {
        self.renderers.insert(format, renderer);
        self
    }

    pub fn supports(&self, format: ReportFormat) -> bool {
        self.renderers.contains_key(&format)
    }

    pub fn render(
        &self,
        format: ReportFormat,
        report: &OrderReport,
        catalog: &ProductCatalog,
    ) -> DomainResult<String> {
        let renderer = self.renderers.get(&format).ok_or_else(|| {
            tracing::debug!(%format, "no renderer registered for format");
            DomainError::validation(format!("no renderer registered for format: {format}"))
        })?;
        renderer.render(report, catalog)
    }
}

impl core::fmt::Debug for ReportRenderers {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut formats: Vec<_> = self.renderers.keys().collect();
        formats.sort_by_key(|format| format.to_string());
        f.debug_struct("ReportRenderers")
            .field("formats", &formats)
            .finish()
    }
}

//! Order reports.
//!
//! An [`OrderReport`] is a snapshot of the fields printed for an order. The
//! output format is picked from a [`ReportRenderers`] registry so new formats
//! can be plugged in next to the fixed-width text table.

pub mod format;
pub mod report;

pub use format::{ReportFormat, ReportRenderer, ReportRenderers, TextRenderer};
pub use report::OrderReport;

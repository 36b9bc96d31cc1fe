//! `storefront` command line: places one order, charges it, ships it and
//! prints its report.

pub mod app;
pub mod config;

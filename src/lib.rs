//! Aggregate merchant payment-transaction exports into the JSON document
//! consumed by the transactions dashboard.
//!
//! ```rust,ignore
//! use payments_dashboard_rs::ReportBuilder;
//!
//! let report = ReportBuilder::new()
//!     .merchant("APEX")
//!     .filename("exports/APEX.csv")
//!     .build()?;
//! ```

mod builder;
mod processor;
mod report;
mod types;

pub mod aggregate;
pub mod codes;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod normalize;
pub mod parsers;

#[cfg(test)]
mod test_utils;

pub use builder::ReportBuilder;
pub use config::{DashboardConfig, MerchantSource};
pub use dashboard::Dashboard;
pub use parsers::prelude::*;
pub use processor::MerchantProcessor;
pub use report::MerchantReport;
pub use types::Transaction;

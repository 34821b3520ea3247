//! Command-line configuration of the dashboard driver.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, ValueEnum};
use tracing::level_filters::LevelFilter;

/// A merchant name and the export file holding its transactions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerchantSource {
    pub name: String,
    pub path: PathBuf,
}

impl FromStr for MerchantSource {
    type Err = String;

    fn from_str(arg: &str) -> Result<Self, Self::Err> {
        match arg.split_once('=') {
            Some((name, path)) if !name.trim().is_empty() && !path.trim().is_empty() => {
                Ok(MerchantSource {
                    name: name.trim().to_string(),
                    path: PathBuf::from(path.trim()),
                })
            }
            _ => Err(format!("merchant source {arg:?} is not NAME=PATH")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// Aggregate merchant transaction exports into one dashboard document
#[derive(Debug, Clone, Parser)]
#[command(name = "dashboard-report")]
#[command(about = "Aggregate merchant transaction exports into one dashboard JSON", long_about = None)]
#[command(version)]
pub struct DashboardConfig {
    /// Path of the JSON document to write
    pub output: PathBuf,

    /// Merchant exports as NAME=PATH, in output order
    #[arg(required = true, value_parser = MerchantSource::from_str)]
    pub merchants: Vec<MerchantSource>,

    /// Log verbosity (logs go to stderr)
    #[arg(long, value_enum, ignore_case = true, default_value = "info")]
    pub log_level: LogLevel,
}

impl DashboardConfig {
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.into()
    }
}

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Serialize, Serializer, ser::SerializeMap};
use tracing::{error, info};

use crate::{
    builder::ReportBuilder,
    config::MerchantSource,
    errors::ReportResult,
    report::MerchantReport,
};

/// The document consumed by the dashboard: merchant name to report, in the
/// order the merchants were added.
#[derive(Debug, Default)]
pub struct Dashboard {
    reports: Vec<(String, MerchantReport)>,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Processes every source in turn. A merchant that fails is logged and
    /// left out; the others are unaffected.
    pub fn build(sources: &[MerchantSource]) -> Self {
        let mut dashboard = Self::new();

        for source in sources {
            let result = ReportBuilder::new()
                .merchant(&source.name)
                .filename(&source.path)
                .build();

            match result {
                Ok(report) => {
                    info!(merchant = %source.name, transactions = report.transactions.len(), "merchant report ready");
                    dashboard.insert(&source.name, report);
                }
                Err(err) => {
                    error!(merchant = %source.name, path = %source.path.display(), %err, "failed to process merchant");
                }
            }
        }

        dashboard
    }

    /// Adds a report, replacing any previous one for the same merchant.
    pub fn insert(&mut self, merchant: &str, report: MerchantReport) {
        match self.reports.iter_mut().find(|(name, _)| name == merchant) {
            Some((_, existing)) => *existing = report,
            None => self.reports.push((merchant.to_string(), report)),
        }
    }

    pub fn get(&self, merchant: &str) -> Option<&MerchantReport> {
        self.reports
            .iter()
            .find(|(name, _)| name == merchant)
            .map(|(_, report)| report)
    }

    pub fn merchants(&self) -> impl Iterator<Item = &str> {
        self.reports.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Pretty-printed JSON, two-space indentation.
    pub fn write_to<W: Write>(&self, writer: W) -> ReportResult<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    pub fn save(&self, path: &Path) -> ReportResult<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

impl Serialize for Dashboard {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.reports.len()))?;
        for (merchant, report) in &self.reports {
            map.serialize_entry(merchant, report)?;
        }
        map.end()
    }
}

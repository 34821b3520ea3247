use tracing::{debug, info};

use crate::aggregate::{
    BrandBreakdown, DailySeries, DeclineCounter, FailureHeatmap, KpiCounters, heatmap_columns,
};
use crate::normalize::NormalizedRow;
use crate::parsers::prelude::*;
use crate::report::MerchantReport;
use crate::types::Transaction;

/// Aggregation state for one merchant. Rows are fed in file order and the
/// report is produced once, at the end.
#[derive(Debug, Default)]
pub struct MerchantProcessor {
    transactions: Vec<Transaction>,
    kpis: KpiCounters,
    daily: DailySeries,
    breakdown: BrandBreakdown,
    heatmap: FailureHeatmap,
    declines: DeclineCounter,
    skipped: usize,
}

impl MerchantProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds every row and produces the report.
    pub fn process<I>(rows: I) -> MerchantReport
    where
        I: IntoIterator<Item = ExportRow>,
    {
        let mut processor = Self::new();
        for row in rows {
            processor.push(row);
        }

        info!(skipped = processor.skipped(), "export processed");
        processor.finish()
    }

    /// Rows whose timestamp does not parse are dropped.
    pub fn push(&mut self, row: ExportRow) {
        match NormalizedRow::try_from(row) {
            Ok(row) => self.record(row),
            Err(err) => {
                self.skipped += 1;
                debug!(%err, "skipping export row");
            }
        }
    }

    /// Number of rows dropped so far.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    fn record(&mut self, row: NormalizedRow) {
        self.kpis.record(&row);
        self.daily.record(&row);
        self.breakdown.record(&row);
        self.heatmap.record(&row);
        self.declines.record(&row);
        self.transactions.push(row.transaction);
    }

    pub fn finish(self) -> MerchantReport {
        MerchantReport {
            kpis: self.kpis,
            daily_data: self.daily.finish(),
            brand_data: self.breakdown.finish(),
            transactions: self.transactions,
            heatmap_data: self.heatmap.finish(),
            error_data: self.declines.finish(),
            heatmap_columns: heatmap_columns(),
        }
    }
}

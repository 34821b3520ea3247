use serde::Serialize;

use crate::aggregate::{CategoryBreakdown, DailyPoint, DeclineEntry, HeatmapRow, KpiCounters};
use crate::types::Transaction;

/// Everything the dashboard shows for one merchant.
#[derive(Debug, Clone, Serialize)]
pub struct MerchantReport {
    pub kpis: KpiCounters,
    pub daily_data: Vec<DailyPoint>,
    pub brand_data: Vec<CategoryBreakdown>,
    /// Normalized transactions in input order.
    pub transactions: Vec<Transaction>,
    pub heatmap_data: Vec<HeatmapRow>,
    pub error_data: Vec<DeclineEntry>,
    pub heatmap_columns: Vec<String>,
}

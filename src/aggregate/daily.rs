use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::normalize::NormalizedRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub success: u64,
    pub failed: u64,
}

/// Success/failure counts per calendar day of `created_at`. Any status other
/// than `failed` counts as a success.
#[derive(Debug, Clone, Default)]
pub struct DailySeries {
    days: BTreeMap<NaiveDate, DailyPoint>,
}

impl DailySeries {
    pub fn record(&mut self, row: &NormalizedRow) {
        let date = row.created_at.date();
        let point = self.days.entry(date).or_insert_with(|| DailyPoint {
            date,
            success: 0,
            failed: 0,
        });

        if row.is_failed() {
            point.failed += 1;
        } else {
            point.success += 1;
        }
    }

    /// Points in ascending date order.
    pub fn finish(self) -> Vec<DailyPoint> {
        self.days.into_values().collect()
    }
}

use chrono::Timelike;
use serde::{Serialize, Serializer, ser::SerializeMap};

use super::entry_mut;
use crate::normalize::NormalizedRow;

pub const HOURS: usize = 24;

/// Brands that always get a heatmap row, even without failures.
const PINNED_BRANDS: [&str; 2] = ["visa", "mastercard"];

/// Column labels of the heatmap, `"0"` to `"23"`.
pub fn heatmap_columns() -> Vec<String> {
    (0..HOURS).map(|hour| hour.to_string()).collect()
}

/// Failed transactions of one brand per hour of day. Serialized flat as
/// `{"name": brand, "0": n, ..., "23": n}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeatmapRow {
    pub name: String,
    pub hours: [u64; HOURS],
}

impl Serialize for HeatmapRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(HOURS + 1))?;
        map.serialize_entry("name", &self.name)?;
        for (hour, count) in self.hours.iter().enumerate() {
            map.serialize_entry(&hour.to_string(), count)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Default)]
pub struct FailureHeatmap {
    brands: Vec<(String, [u64; HOURS])>,
}

impl FailureHeatmap {
    pub fn record(&mut self, row: &NormalizedRow) {
        if !row.is_failed() {
            return;
        }

        let hours = entry_mut(&mut self.brands, row.transaction.brand.as_str());
        hours[row.created_at.hour() as usize] += 1;
    }

    /// Brands in first-seen order, followed by any pinned brand that had no
    /// failures.
    pub fn finish(mut self) -> Vec<HeatmapRow> {
        for brand in PINNED_BRANDS {
            entry_mut(&mut self.brands, brand);
        }

        self.brands
            .into_iter()
            .map(|(name, hours)| HeatmapRow { name, hours })
            .collect()
    }
}

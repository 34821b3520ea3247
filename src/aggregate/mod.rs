//! Running aggregates built in a single pass over a merchant's rows.
//!
//! Every accumulator takes a [`NormalizedRow`](crate::normalize::NormalizedRow)
//! in `record` and produces its final report shape in `finish`.

mod breakdown;
mod daily;
mod declines;
mod heatmap;
mod kpi;

use std::borrow::Borrow;

use serde::{Serialize, Serializer, ser::SerializeMap};

pub use breakdown::{BrandBreakdown, BrandShare, CategoryBreakdown};
pub use daily::{DailyPoint, DailySeries};
pub use declines::{DeclineCounter, DeclineEntry};
pub use heatmap::{FailureHeatmap, HeatmapRow, HOURS, heatmap_columns};
pub use kpi::{KpiCounters, TOTAL};

/// Counter map with open-ended keys. Keys keep the order in which they were
/// first seen and read as zero until written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    counts: Vec<(String, u64)>,
}

impl Tally {
    pub fn increment(&mut self, key: &str) {
        *entry_mut(&mut self.counts, key) += 1;
    }

    pub fn get(&self, key: &str) -> u64 {
        self.counts
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, count)| (k.as_str(), *count))
    }

    pub fn sum(&self) -> u64 {
        self.counts.iter().map(|(_, count)| count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl Serialize for Tally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (key, count) in &self.counts {
            map.serialize_entry(key, count)?;
        }
        map.end()
    }
}

/// Finds the value stored under `key`, appending a default one if missing.
pub(crate) fn entry_mut<'a, K, Q, V>(entries: &'a mut Vec<(K, V)>, key: &Q) -> &'a mut V
where
    K: Borrow<Q>,
    Q: PartialEq + ToOwned<Owned = K> + ?Sized,
    V: Default,
{
    let idx = match entries.iter().position(|(k, _)| <K as Borrow<Q>>::borrow(k) == key) {
        Some(idx) => idx,
        None => {
            entries.push((key.to_owned(), V::default()));
            entries.len() - 1
        }
    };
    &mut entries[idx].1
}

/// `part / whole * 100` rounded to `dp` decimal places, 0 when `whole` is 0.
///
/// The ratio is computed in `f64` and the binary value is rounded exactly,
/// ties to even, so e.g. 23/80 gives 28.7 (28.749999...).
pub(crate) fn rounded_percentage(part: u64, whole: u64, dp: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }

    let percentage = part as f64 / whole as f64 * 100.0;
    format!("{percentage:.dp$}").parse().unwrap_or(percentage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_tally_defaults_to_zero() {
        let tally = Tally::default();
        assert_eq!(tally.get("success"), 0);
        assert!(tally.is_empty());
        assert_eq!(tally.sum(), 0);
    }

    #[test]
    fn test_tally_keeps_first_seen_order() {
        let mut tally = Tally::default();
        tally.increment("total");
        tally.increment("failed");
        tally.increment("total");
        tally.increment("chargeback");

        let keys: Vec<_> = tally.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["total", "failed", "chargeback"]);
        assert_eq!(tally.get("total"), 2);
        assert_eq!(tally.sum(), 4);
    }

    #[test]
    fn test_tally_serializes_as_object() {
        let mut tally = Tally::default();
        tally.increment("total");
        tally.increment("success");

        let json = serde_json::to_string(&tally).unwrap();
        assert_eq!(json, r#"{"total":1,"success":1}"#);
    }

    #[rstest]
    #[case(1, 1, 2, 100.0)]
    #[case(1, 3, 2, 33.33)]
    #[case(2, 3, 2, 66.67)]
    #[case(2, 3, 1, 66.7)]
    #[case(1, 8, 1, 12.5)]
    #[case(0, 5, 1, 0.0)]
    #[case(0, 0, 2, 0.0)]
    #[case(3, 0, 1, 0.0)]
    #[case(23, 80, 1, 28.7)]
    #[case(23, 160, 2, 14.37)]
    fn test_rounded_percentage(
        #[case] part: u64,
        #[case] whole: u64,
        #[case] dp: usize,
        #[case] expected: f64,
    ) {
        assert_eq!(rounded_percentage(part, whole, dp), expected);
    }

    #[test]
    fn test_entry_mut_appends_once() {
        let mut entries: Vec<(String, u64)> = Vec::new();
        *entry_mut(&mut entries, "visa") += 1;
        *entry_mut(&mut entries, "elo") += 1;
        *entry_mut(&mut entries, "visa") += 1;

        assert_eq!(entries, vec![("visa".to_string(), 2), ("elo".to_string(), 1)]);
    }
}

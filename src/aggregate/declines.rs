use serde::Serialize;

use super::{Tally, rounded_percentage};
use crate::codes::{self, DECLINE_ACTION, DECLINE_TYPE};
use crate::normalize::NormalizedRow;

/// One line of the decline table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeclineEntry {
    pub code: String,
    pub count: u64,
    /// Share of all failures, in percent with two decimals.
    pub percentage: f64,
    pub details: &'static str,
    pub action: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// Failure counts per error code.
#[derive(Debug, Clone, Default)]
pub struct DeclineCounter {
    codes: Tally,
}

impl DeclineCounter {
    pub fn record(&mut self, row: &NormalizedRow) {
        if row.is_failed() {
            self.codes.increment(row.error_code());
        }
    }

    /// Entries by descending count; equal counts keep first-seen order.
    pub fn finish(self) -> Vec<DeclineEntry> {
        let total = self.codes.sum();

        let mut entries: Vec<_> = self
            .codes
            .iter()
            .map(|(code, count)| DeclineEntry {
                code: code.to_string(),
                count,
                percentage: rounded_percentage(count, total, 2),
                details: codes::describe(code),
                action: DECLINE_ACTION,
                kind: DECLINE_TYPE,
            })
            .collect();

        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::normalized;

    const AT: &str = "2025-10-01 10:00:00+00";

    fn failed(code: &str) -> NormalizedRow {
        let payload = format!(r#"{{"failedReason": {{"code": "{code}"}}}}"#);
        normalized("failed", "capture", &payload, AT)
    }

    #[test]
    fn test_sorted_by_count_with_stable_ties() {
        let mut declines = DeclineCounter::default();
        for code in ["ABECS-57", "ABECS-51", "X-1", "ABECS-51", "ABECS-59", "ABECS-51"] {
            declines.record(&failed(code));
        }

        let entries = declines.finish();
        let order: Vec<_> = entries.iter().map(|e| (e.code.as_str(), e.count)).collect();
        assert_eq!(order, [("ABECS-51", 3), ("ABECS-57", 1), ("X-1", 1), ("ABECS-59", 1)]);

        assert_eq!(entries[0].percentage, 50.0);
        assert_eq!(entries[1].percentage, 16.67);
        assert_eq!(entries[0].details, "Insufficient Funds");
        assert_eq!(entries[2].details, "Unknown Error");
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        let mut declines = DeclineCounter::default();
        for code in ["A", "B", "C", "A", "B", "D", "E"] {
            declines.record(&failed(code));
        }

        let sum: f64 = declines.finish().iter().map(|e| e.percentage).sum();
        assert!((sum - 100.0).abs() <= 0.1, "sum was {sum}");
    }

    #[test]
    fn test_missing_code_counts_as_unknown() {
        let mut declines = DeclineCounter::default();
        declines.record(&normalized("failed", "capture", "{not json", AT));
        declines.record(&normalized("success", "capture", r#"{"failedReason": {"code": "ABECS-51"}}"#, AT));

        let entries = declines.finish();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].code, "Unknown");
        assert_eq!(entries[0].percentage, 100.0);
        assert_eq!(entries[0].details, "Unknown Error");
    }

    #[test]
    fn test_no_failures_no_entries() {
        let mut declines = DeclineCounter::default();
        declines.record(&normalized("success", "capture", "{}", AT));
        assert!(declines.finish().is_empty());
    }

    #[test]
    fn test_entry_serialization() {
        let mut declines = DeclineCounter::default();
        declines.record(&failed("ABECS-91"));

        let json = serde_json::to_value(declines.finish()).unwrap();
        assert_eq!(json[0]["code"], "ABECS-91");
        assert_eq!(json[0]["count"], 1);
        assert_eq!(json[0]["percentage"], 100.0);
        assert_eq!(json[0]["details"], "Bank Offline");
        assert_eq!(json[0]["action"], "Check ABECS documentation");
        assert_eq!(json[0]["type"], "Decline");
    }
}

use serde::Serialize;

use super::Tally;
use crate::normalize::{KpiBucket, NormalizedRow};

pub const TOTAL: &str = "total";

/// Status counters per KPI bucket. All four buckets are always present in the
/// report, untouched ones as empty objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct KpiCounters {
    pub authorization: Tally,
    pub capture: Tally,
    pub zero_auth: Tally,
    pub debit: Tally,
}

impl KpiCounters {
    pub fn record(&mut self, row: &NormalizedRow) {
        let Some(bucket) = row.kpi_bucket() else {
            return;
        };

        let counters = self.bucket_mut(bucket);
        counters.increment(TOTAL);
        counters.increment(&row.transaction.status);
    }

    fn bucket_mut(&mut self, bucket: KpiBucket) -> &mut Tally {
        match bucket {
            KpiBucket::ZeroAuth => &mut self.zero_auth,
            KpiBucket::Debit => &mut self.debit,
            KpiBucket::Authorization => &mut self.authorization,
            KpiBucket::Capture => &mut self.capture,
        }
    }
}

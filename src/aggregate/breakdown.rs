use serde::Serialize;

use super::{Tally, TOTAL, entry_mut, rounded_percentage};
use crate::normalize::{CardCategory, NormalizedRow};

/// One brand inside a card category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandShare {
    pub brand: String,
    pub total: u64,
    /// Success rate in percent, unrounded.
    pub rate: f64,
}

/// Totals of one card category, summed over its brands.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    #[serde(rename = "type")]
    pub category: CardCategory,
    pub total: u64,
    pub success: u64,
    pub failed: u64,
    /// Success rate in percent, rounded to one decimal.
    pub approval_rate: f64,
    pub brands: Vec<BrandShare>,
}

/// Status counters keyed by (card category, brand), both in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct BrandBreakdown {
    categories: Vec<(CardCategory, Vec<(String, Tally)>)>,
}

impl BrandBreakdown {
    pub fn record(&mut self, row: &NormalizedRow) {
        let brands = entry_mut(&mut self.categories, &row.category());
        let counters = entry_mut(brands, row.transaction.brand.as_str());

        counters.increment(TOTAL);
        counters.increment(&row.transaction.status);
    }

    pub fn finish(self) -> Vec<CategoryBreakdown> {
        self.categories
            .into_iter()
            .map(|(category, brands)| {
                let mut entry = CategoryBreakdown {
                    category,
                    total: 0,
                    success: 0,
                    failed: 0,
                    approval_rate: 0.0,
                    brands: Vec::with_capacity(brands.len()),
                };

                for (brand, counters) in brands {
                    let total = counters.get(TOTAL);
                    let success = counters.get("success");

                    entry.total += total;
                    entry.success += success;
                    entry.failed += counters.get("failed");
                    entry.brands.push(BrandShare {
                        brand,
                        total,
                        rate: success_rate(success, total),
                    });
                }

                entry.approval_rate = rounded_percentage(entry.success, entry.total, 1);
                entry
            })
            .collect()
    }
}

fn success_rate(success: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    success as f64 / total as f64 * 100.0
}

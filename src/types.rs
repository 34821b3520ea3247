use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A normalized transaction as it appears in the `transactions` list of a
/// merchant report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The raw `created_at` string, untouched.
    pub date: String,
    pub order_id: String,
    pub category: String,
    pub status: String,
    pub external_id: String,
    /// Major units (minor-unit amount / 100).
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub brand: String,
    /// Set only for failed transactions, `null` otherwise.
    pub error_code: Option<String>,
}

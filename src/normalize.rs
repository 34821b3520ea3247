//! Derivation of the canonical transaction fields from an export row and its
//! decoded payload.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{errors::ReportError, parsers::prelude::*, types::Transaction};

pub const UNKNOWN: &str = "Unknown";
pub const STATUS_FAILED: &str = "failed";

const DEFAULT_CARD_TYPE: &str = "credit";

/// Card category shown in the brand breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CardCategory {
    Credit,
    Debit,
    Multiple,
}

/// KPI bucket a transaction counts towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KpiBucket {
    ZeroAuth,
    Debit,
    Authorization,
    Capture,
}

/// An export row after normalization: the transaction that goes into the
/// report plus the fields only the aggregators need.
#[derive(Debug, Clone)]
pub struct NormalizedRow {
    pub transaction: Transaction,
    pub created_at: NaiveDateTime,
    pub card_type: String,
    pub is_zero_auth: bool,
    pub is_debit: bool,
}

impl TryFrom<ExportRow> for NormalizedRow {
    type Error = ReportError;

    fn try_from(row: ExportRow) -> Result<Self, Self::Error> {
        let created_at = row.created_at.parse()?;
        let payload = TransactionPayload::decode(&row.payload);

        let card_type = payload
            .card_type
            .as_deref()
            .map(str::to_lowercase)
            .unwrap_or_else(|| DEFAULT_CARD_TYPE.to_string());
        let is_zero_auth = payload.is_zero_auth.unwrap_or(false);
        let is_debit = payload.is_debit.unwrap_or(false) || card_type == "debit";

        let error_code = (row.status == STATUS_FAILED)
            .then(|| payload.failure_code().unwrap_or(UNKNOWN).to_string());

        let transaction = Transaction {
            date: row.created_at.as_str().to_string(),
            order_id: row.order_id,
            category: row.category,
            status: row.status,
            external_id: row.external_id,
            amount: major_amount(&payload),
            brand: brand(&payload),
            error_code,
        };

        Ok(NormalizedRow {
            transaction,
            created_at,
            card_type,
            is_zero_auth,
            is_debit,
        })
    }
}

impl NormalizedRow {
    pub fn is_failed(&self) -> bool {
        self.transaction.status == STATUS_FAILED
    }

    pub fn category(&self) -> CardCategory {
        if self.is_debit {
            CardCategory::Debit
        } else if self.card_type == "multiple" {
            CardCategory::Multiple
        } else {
            CardCategory::Credit
        }
    }

    /// Zero-auth wins over debit, debit over the export category. Rows of any
    /// other category count towards no bucket.
    pub fn kpi_bucket(&self) -> Option<KpiBucket> {
        if self.is_zero_auth {
            Some(KpiBucket::ZeroAuth)
        } else if self.is_debit {
            Some(KpiBucket::Debit)
        } else {
            match self.transaction.category.as_str() {
                "authorization" => Some(KpiBucket::Authorization),
                "capture" => Some(KpiBucket::Capture),
                _ => None,
            }
        }
    }

    /// Error code used by the decline table; failed rows always have one.
    pub fn error_code(&self) -> &str {
        self.transaction.error_code.as_deref().unwrap_or(UNKNOWN)
    }
}

fn major_amount(payload: &TransactionPayload) -> Decimal {
    payload
        .minor_amount()
        .map(|minor| minor / Decimal::ONE_HUNDRED)
        .unwrap_or(Decimal::ZERO)
}

/// `cardBrand` is lowercased but the `cardType` fallback keeps its casing.
/// Each family check runs against the brand as rewritten by the previous one.
fn brand(payload: &TransactionPayload) -> String {
    let mut brand = match (&payload.card_brand, &payload.card_type) {
        (Some(card_brand), _) => card_brand.to_lowercase(),
        (None, Some(card_type)) => card_type.clone(),
        (None, None) => UNKNOWN.to_string(),
    };

    for family in ["master", "visa", "elo"] {
        if brand.contains(family) {
            brand = match family {
                "master" => "mastercard".to_string(),
                other => other.to_string(),
            };
        }
    }

    brand
}

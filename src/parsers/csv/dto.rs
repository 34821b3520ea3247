use csv::StringRecord;

use super::types::CreatedAt;
use crate::errors::ReportError;

/// Minimum number of columns a well-formed export row carries.
pub const MIN_COLUMNS: usize = 15;

const COL_EXTERNAL_ID: usize = 0;
const COL_ORDER_ID: usize = 1;
const COL_CATEGORY: usize = 4;
const COL_STATUS: usize = 6;
const COL_CREATED_AT: usize = 12;
const COL_PAYLOAD: usize = 14;

/// One record of a merchant transaction export, reduced to the columns the
/// report reads. The remaining columns are ignored.
#[derive(Debug, Clone)]
pub struct ExportRow {
    pub external_id: String,
    pub order_id: String,
    pub category: String,
    pub status: String,
    pub created_at: CreatedAt,
    pub payload: String,
}

impl TryFrom<&StringRecord> for ExportRow {
    type Error = ReportError;

    fn try_from(record: &StringRecord) -> Result<Self, Self::Error> {
        if record.len() < MIN_COLUMNS {
            return Err(ReportError::ShortRow(record.len()));
        }

        let field = |idx: usize| record.get(idx).unwrap_or_default().to_string();

        Ok(ExportRow {
            external_id: field(COL_EXTERNAL_ID),
            order_id: field(COL_ORDER_ID),
            category: field(COL_CATEGORY),
            status: field(COL_STATUS),
            created_at: field(COL_CREATED_AT).into(),
            payload: field(COL_PAYLOAD),
        })
    }
}

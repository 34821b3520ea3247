//! Row builders shared by the unit tests.

use crate::normalize::NormalizedRow;
use crate::parsers::prelude::*;

pub(crate) fn export_row(status: &str, category: &str, payload: &str, created_at: &str) -> ExportRow {
    ExportRow {
        external_id: "ext-1".to_string(),
        order_id: "ord-1".to_string(),
        category: category.to_string(),
        status: status.to_string(),
        created_at: created_at.into(),
        payload: payload.to_string(),
    }
}

pub(crate) fn normalized(status: &str, category: &str, payload: &str, created_at: &str) -> NormalizedRow {
    NormalizedRow::try_from(export_row(status, category, payload, created_at))
        .expect("test rows carry valid timestamps")
}

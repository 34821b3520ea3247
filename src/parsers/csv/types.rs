use crate::errors::ReportError;
use chrono::NaiveDateTime;

/// The `created_at` column of a transaction export row.
///
/// The gateway writes the instant in Postgres text format:
/// - `2025-10-01 14:03:27.123456+00`
/// - `2025-10-01 14:03:27+00`
/// - `2025-10-01 14:03:27` (older exports, no offset)
///
/// The `+00` suffix is always UTC and is dropped before parsing.
#[derive(Debug, Clone)]
pub struct CreatedAt(String);

impl CreatedAt {
    const UTC_SUFFIX: &'static str = "+00";

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses into `NaiveDateTime`, first with fractional seconds and then without
    pub fn parse(&self) -> Result<NaiveDateTime, ReportError> {
        let s = self.0.strip_suffix(Self::UTC_SUFFIX).unwrap_or(&self.0);

        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f")
            .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S"))
            .map_err(|_| ReportError::CreatedAtInvalidFormat(self.0.clone()))
    }
}

impl From<String> for CreatedAt {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for CreatedAt {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

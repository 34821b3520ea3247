use std::io::{BufRead, BufReader, Read};

use super::dto::ExportRow;
use crate::errors::{ReportError, ReportResult};
use csv::ReaderBuilder;
use tracing::debug;

pub struct ExportParser;

impl ExportParser {
    pub fn parse(content: &str) -> ReportResult<Vec<ExportRow>> {
        Self::parse_reader(content.as_bytes())
    }

    /// Reads every record after the header. Rows that are too short are
    /// dropped; a broken CSV stream fails the whole export.
    pub fn parse_reader<R: Read>(reader: R) -> ReportResult<Vec<ExportRow>> {
        let mut reader = BufReader::new(reader);

        // The first physical line is the header, even when blank; only a
        // file with no line at all is rejected.
        let mut header = Vec::new();
        if reader.read_until(b'\n', &mut header)? == 0 {
            return Err(ReportError::MissingHeader);
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut rows = Vec::new();

        for (line, result) in reader.records().enumerate() {
            let record = result?;
            match ExportRow::try_from(&record) {
                Ok(row) => rows.push(row),
                Err(err) => debug!(line = line + 2, %err, "skipping export row"),
            }
        }

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const HEADER: &str = "id,order_id,c2,c3,category,c5,status,c7,c8,c9,c10,c11,created_at,c13,transaction_data";

    fn sample() -> String {
        format!(
            "{HEADER}\n\
             ext-1,ord-1,,,authorization,,success,,,,,,2025-10-01 10:00:00+00,,\"{{\"\"cardBrand\"\":\"\"VISA\"\"}}\"\n\
             ext-2,ord-2,,,capture\n\
             ext-3,ord-3,,,capture,,failed,,,,,,2025-10-02 11:00:00+00,,{{}}\n"
        )
    }

    #[test]
    fn test_parse_drops_short_rows() {
        let rows = ExportParser::parse(&sample()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].external_id, "ext-1");
        assert_eq!(rows[0].payload, r#"{"cardBrand":"VISA"}"#);
        assert_eq!(rows[1].external_id, "ext-3");
        assert_eq!(rows[1].status, "failed");
    }

    #[test]
    fn test_header_only_export_is_empty() {
        let rows = ExportParser::parse(&format!("{HEADER}\n")).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_missing_header_fails() {
        let result = ExportParser::parse("");
        assert!(matches!(result, Err(ReportError::MissingHeader)));
    }

    #[rstest]
    #[case("\n")]
    #[case("\r\n")]
    #[case("\n\n")]
    fn test_blank_header_line_is_empty_export(#[case] content: &str) {
        let rows = ExportParser::parse(content).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_blank_first_line_is_consumed_as_header() {
        let content = "\next-1,ord-1,,,authorization,,success,,,,,,2025-10-01 10:00:00+00,,{}\n";
        let rows = ExportParser::parse(content).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].external_id, "ext-1");
    }

    #[test]
    fn test_invalid_utf8_fails_the_export() {
        let mut bytes = format!("{HEADER}\n").into_bytes();
        bytes.extend_from_slice(b"ext-1,\xff\xfe,,,authorization,,success,,,,,,2025-10-01 10:00:00,,{}\n");

        let result = ExportParser::parse_reader(bytes.as_slice());
        assert!(matches!(result, Err(ReportError::CsvReadFailed(_))));
    }
}

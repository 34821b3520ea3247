use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use tracing::{info, info_span};

use crate::{
    errors::{ReportError, ReportResult},
    parsers::prelude::*,
    processor::MerchantProcessor,
    report::MerchantReport,
};

/// Builds the report of one merchant from an export given either as content
/// or as a file path. Content wins when both are set.
#[derive(Default)]
pub struct ReportBuilder {
    merchant: Option<String>,
    content: Option<String>,
    filepath: Option<PathBuf>,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn merchant(mut self, merchant: &str) -> Self {
        self.merchant = Some(merchant.to_string());
        self
    }

    pub fn content(mut self, content: &str) -> Self {
        self.content = Some(content.to_string());
        self
    }

    pub fn filename(mut self, filename: impl AsRef<Path>) -> Self {
        self.filepath = Some(filename.as_ref().to_path_buf());
        self
    }

    /// Any I/O or CSV failure fails the whole merchant; no partial report is
    /// returned. The export file is closed before this returns.
    pub fn build(self) -> ReportResult<MerchantReport> {
        let merchant = self.merchant.as_deref().unwrap_or("-");
        let _span = info_span!("merchant", name = merchant).entered();

        let rows = match (self.content, self.filepath) {
            (Some(content), _) => ExportParser::parse(&content)?,
            (None, Some(path)) => {
                info!(path = %path.display(), "reading export");
                let file = File::open(&path)?;
                ExportParser::parse_reader(BufReader::new(file))?
            }
            (None, None) => return Err(ReportError::MissingContentAndFilepath),
        };

        Ok(MerchantProcessor::process(rows))
    }
}

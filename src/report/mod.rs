use crate::core::aggregator::SummaryTable;
use anyhow::Result;

pub mod csv;
pub mod json;
pub mod text;

/// What gets printed to stdout once the tables are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    Text,
    Json,
    #[default]
    None,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "table" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "none" => Ok(ReportFormat::None),
            _ => Err(format!("Unknown report format: {}", s)),
        }
    }
}

pub struct ReportGenerator {
    format: ReportFormat,
}

impl ReportGenerator {
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Rendered summary, or `None` when nothing should be printed
    pub fn generate(&self, summary: &SummaryTable) -> Result<Option<String>> {
        match self.format {
            ReportFormat::Text => Ok(Some(text::generate_text_report(summary))),
            ReportFormat::Json => json::generate_json_report(summary).map(Some),
            ReportFormat::None => Ok(None),
        }
    }
}

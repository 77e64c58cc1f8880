mod json;
mod progress;
mod table;
mod text;

pub use json::JsonFormatter;
pub use progress::ScanProgress;
pub use table::{ClassTableFormatter, LegacyTableFormatter, Table};
pub use text::{ColorMode, FailureFormatter};

use crate::analyzer::ProjectReport;
use crate::error::Result;

/// Trait for rendering a project report.
pub trait ReportFormatter {
    /// Format the report into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &ProjectReport) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Per-class table.
    #[default]
    Table,
    /// Program, physical LOC and logical LOC.
    Legacy,
    Json,
}

impl OutputFormat {
    /// Builds the formatter for this format.
    #[must_use]
    pub fn formatter(self, color: ColorMode) -> Box<dyn ReportFormatter> {
        match self {
            Self::Table => Box::new(ClassTableFormatter::new(color)),
            Self::Legacy => Box::new(LegacyTableFormatter::new(color)),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" | "class" => Ok(Self::Table),
            "legacy" => Ok(Self::Legacy),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

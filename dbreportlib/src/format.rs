//! The closed set of output representations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ReportError;

/// Target representation for one report document.
///
/// Chosen once per report and threaded through every cell and row. Adding a
/// variant means extending each `match` on it in `output` and `helper`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Fixed-width plain text, columns aligned by padding
    #[default]
    Text,
    /// HTML markup, one `<table>` per reported object
    Html,
    /// Comma-separated values
    Csv,
}

impl OutputFormat {
    /// Every supported format, in declaration order.
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Text, OutputFormat::Html, OutputFormat::Csv];

    /// Columns are aligned by padding cells to a nominal width.
    pub fn is_fixed_width(self) -> bool {
        matches!(self, OutputFormat::Text)
    }

    /// Content is wrapped in tags and must be entity-escaped.
    pub fn is_markup(self) -> bool {
        matches!(self, OutputFormat::Html)
    }

    /// Fields are separated by a delimiter and quoted when needed.
    pub fn is_delimited(self) -> bool {
        matches!(self, OutputFormat::Csv)
    }

    /// Lowercase name, as accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Html => "html",
            OutputFormat::Csv => "csv",
        }
    }

    /// Conventional file extension for documents in this format.
    pub fn file_extension(self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Html => "html",
            OutputFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" | "plain" => Ok(OutputFormat::Text),
            "html" | "htm" => Ok(OutputFormat::Html),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(ReportError::UnknownFormat(s.to_string())),
        }
    }
}

//! Rendering options shared by every row and envelope a helper produces.

use serde::{Deserialize, Serialize};

/// Line terminator of the current platform.
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
/// Line terminator of the current platform.
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// How generic data rows (`create_row` / `create_row_header`) are laid out
/// when the active format is text.
///
/// Data rows carry no per-column width metadata, so by default text output
/// falls back to CSV rules for them. Html and csv ignore this setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataRowLayout {
    /// Render text data rows with CSV quoting and comma delimiters
    #[default]
    Delimited,
    /// Pad each text data cell to the given width
    FixedWidth(usize),
}

/// Options for a `FormattingHelper`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattingOptions {
    /// Terminator appended to every rendered row
    pub line_separator: String,
    /// Document title (html `<title>` only)
    pub title: Option<String>,
    /// Layout of generic data rows in text output
    pub data_rows: DataRowLayout,
}

impl Default for FormattingOptions {
    fn default() -> Self {
        Self {
            line_separator: LINE_SEPARATOR.to_string(),
            title: None,
            data_rows: DataRowLayout::default(),
        }
    }
}

impl FormattingOptions {
    /// Create options with platform defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the row terminator.
    pub fn line_separator(mut self, separator: impl Into<String>) -> Self {
        self.line_separator = separator.into();
        self
    }

    /// Set the document title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the text layout for generic data rows.
    pub fn data_rows(mut self, layout: DataRowLayout) -> Self {
        self.data_rows = layout;
        self
    }
}

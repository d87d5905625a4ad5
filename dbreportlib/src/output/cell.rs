//! A single renderable field.
//!
//! A `TableCell` knows its output format and renders itself with that
//! format's rules: padding for text, a `<td>` element for html, quoting for
//! csv. Cells are built immediately before rendering and never change after.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroUsize;

use crate::error::ReportError;
use crate::format::OutputFormat;
use crate::pad::{pad_left, pad_right};
use crate::Result;

/// Horizontal alignment of a padded text cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Content first, padding after
    #[default]
    Left,
    /// Padding first, content after
    Right,
}

/// Number of logical columns a cell occupies. Always at least one.
///
/// Only html honors spans (as `colspan`). Text and csv emit the content
/// once; a row builder that needs a spanned csv cell adds the extra
/// cells itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColumnSpan(NonZeroUsize);

impl ColumnSpan {
    /// A regular single-column cell.
    pub const ONE: ColumnSpan = ColumnSpan(NonZeroUsize::MIN);
    /// A cell spanning two columns.
    pub const TWO: ColumnSpan = ColumnSpan(NonZeroUsize::MIN.saturating_add(1));
    /// A cell spanning three columns.
    pub const THREE: ColumnSpan = ColumnSpan(NonZeroUsize::MIN.saturating_add(2));

    /// Validate a span; zero is rejected.
    pub fn new(span: usize) -> Result<Self> {
        NonZeroUsize::new(span)
            .map(ColumnSpan)
            .ok_or(ReportError::InvalidColumnSpan(span))
    }

    /// The span as a plain count.
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for ColumnSpan {
    fn default() -> Self {
        Self::ONE
    }
}

/// One field of a row, bound to an output format.
///
/// ```rust
/// use dbreportlib::{Alignment, ColumnSpan, OutputFormat, TableCell};
///
/// let cell = TableCell::new(OutputFormat::Html, "a < b")
///     .span(ColumnSpan::TWO)
///     .style_class("name");
/// assert_eq!(cell.render(), r#"<td colspan="2" class="name">a &lt; b</td>"#);
///
/// let cell = TableCell::new(OutputFormat::Text, "42").aligned(Alignment::Right, 5);
/// assert_eq!(cell.render(), "   42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCell {
    format: OutputFormat,
    content: String,
    span: ColumnSpan,
    style_class: Option<String>,
    alignment: Alignment,
    width: usize,
}

impl TableCell {
    /// Create a single-column, unpadded, unstyled cell.
    pub fn new(format: OutputFormat, content: impl Into<String>) -> Self {
        Self {
            format,
            content: content.into(),
            span: ColumnSpan::ONE,
            style_class: None,
            alignment: Alignment::Left,
            width: 0,
        }
    }

    /// An empty cell, used as a placeholder.
    pub fn empty(format: OutputFormat) -> Self {
        Self::new(format, String::new())
    }

    /// Set the column span (html only).
    pub fn span(mut self, span: ColumnSpan) -> Self {
        self.span = span;
        self
    }

    /// Set the css class (html only). An empty class is dropped.
    pub fn style_class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        self.style_class = if class.is_empty() { None } else { Some(class) };
        self
    }

    /// Set alignment and padded width (text only). Width 0 means no padding.
    pub fn aligned(mut self, alignment: Alignment, width: usize) -> Self {
        self.alignment = alignment;
        self.width = width;
        self
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn column_span(&self) -> ColumnSpan {
        self.span
    }

    pub fn class(&self) -> Option<&str> {
        self.style_class.as_deref()
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Render the cell in its format.
    pub fn render(&self) -> String {
        match self.format {
            OutputFormat::Text => match self.alignment {
                Alignment::Left => pad_right(self.content.as_str(), self.width),
                Alignment::Right => pad_left(self.content.as_str(), self.width),
            },
            OutputFormat::Html => {
                let mut html = String::from("<td");
                if self.span.get() > 1 {
                    html.push_str(&format!(" colspan=\"{}\"", self.span.get()));
                }
                if let Some(class) = &self.style_class {
                    html.push_str(&format!(" class=\"{}\"", escape_html(class)));
                }
                html.push('>');
                html.push_str(&escape_html(&self.content));
                html.push_str("</td>");
                html
            }
            OutputFormat::Csv => escape_csv(&self.content),
        }
    }
}

impl fmt::Display for TableCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Replace the five html-reserved characters with entities.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Quote a csv field if it contains a comma, quote, or line break.
/// Embedded quotes are doubled.
pub fn escape_csv(text: &str) -> String {
    if text.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}

//! The per-format document envelope.

use crate::format::OutputFormat;
use crate::helper::TextFormattingHelper;
use crate::options::FormattingOptions;
use crate::output::{escape_csv, escape_html, ColumnSpan, TableCell, TableRow};

/// Width of the text rules drawn under object names and between groups.
pub const RULE_WIDTH: usize = 72;

const HTML_STYLE: &str = "\
table { border-collapse: collapse; margin-bottom: 1.5em; }
caption { font-weight: bold; text-align: left; padding: 0.25em 0; }
td { padding: 0.1em 0.6em; vertical-align: top; }
td.ordinal { text-align: right; color: #777; }
td.name { font-weight: bold; }
td.description { text-align: right; font-style: italic; }
td.definition { font-family: monospace; white-space: pre-wrap; }
td.separator { border-top: 1px solid #bbb; }
pre { background: #f4f4f4; padding: 0.5em; }";

/// Formats rows and envelopes for one output format.
///
/// ```rust
/// use dbreportlib::{FormattingHelper, FormattingOptions, OutputFormat, TextFormattingHelper};
///
/// let helper = FormattingHelper::with_options(
///     OutputFormat::Csv,
///     FormattingOptions::new().line_separator("\n"),
/// );
/// assert_eq!(helper.create_object_start("orders"), "orders\n");
/// assert_eq!(helper.create_name_row("id", "integer"), "id,integer\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattingHelper {
    format: OutputFormat,
    options: FormattingOptions,
}

impl FormattingHelper {
    /// Create a helper with default options.
    pub fn new(format: OutputFormat) -> Self {
        Self::with_options(format, FormattingOptions::default())
    }

    pub fn with_options(format: OutputFormat, options: FormattingOptions) -> Self {
        Self { format, options }
    }

    fn nl(&self) -> &str {
        &self.options.line_separator
    }
}

impl TextFormattingHelper for FormattingHelper {
    fn output_format(&self) -> OutputFormat {
        self.format
    }

    fn options(&self) -> &FormattingOptions {
        &self.options
    }

    fn create_document_start(&self) -> String {
        match self.format {
            OutputFormat::Text | OutputFormat::Csv => String::new(),
            OutputFormat::Html => {
                let nl = self.nl();
                let mut html = String::new();
                for line in [
                    "<!DOCTYPE html>",
                    "<html>",
                    "<head>",
                    "<meta charset=\"utf-8\">",
                ] {
                    html.push_str(line);
                    html.push_str(nl);
                }
                if let Some(title) = &self.options.title {
                    html.push_str(&format!("<title>{}</title>{nl}", escape_html(title)));
                }
                html.push_str("<style>");
                html.push_str(nl);
                for line in HTML_STYLE.lines() {
                    html.push_str(line);
                    html.push_str(nl);
                }
                html.push_str(&format!("</style>{nl}</head>{nl}<body>{nl}"));
                html
            }
        }
    }

    fn create_document_end(&self) -> String {
        match self.format {
            OutputFormat::Text | OutputFormat::Csv => String::new(),
            OutputFormat::Html => format!("</body>{nl}</html>{nl}", nl = self.nl()),
        }
    }

    fn create_object_start(&self, name: &str) -> String {
        let nl = self.nl();
        match self.format {
            OutputFormat::Text => format!("{nl}{name}{nl}{}{nl}", "=".repeat(RULE_WIDTH)),
            OutputFormat::Html => format!(
                "<table>{nl}<caption>{}</caption>{nl}",
                escape_html(name)
            ),
            OutputFormat::Csv => format!("{}{nl}", escape_csv(name)),
        }
    }

    fn create_object_end(&self) -> String {
        match self.format {
            OutputFormat::Text | OutputFormat::Csv => String::new(),
            OutputFormat::Html => format!("</table>{}", self.nl()),
        }
    }

    fn create_separator_row(&self) -> String {
        match self.format {
            OutputFormat::Text => format!("{}{}", "-".repeat(RULE_WIDTH), self.nl()),
            OutputFormat::Html => {
                let mut row = TableRow::new(self.format);
                row.push(
                    TableCell::empty(self.format)
                        .span(ColumnSpan::THREE)
                        .style_class("separator"),
                );
                row.render(self.nl())
            }
            OutputFormat::Csv => self.create_empty_row(),
        }
    }

    fn create_arrow(&self) -> String {
        match self.format {
            OutputFormat::Text | OutputFormat::Csv => " --> ".to_string(),
            OutputFormat::Html => " \u{2192} ".to_string(),
        }
    }

    fn create_preformatted_text(&self, id: &str, text: &str) -> String {
        let nl = self.nl();
        match self.format {
            OutputFormat::Text | OutputFormat::Csv => format!("{text}{nl}"),
            OutputFormat::Html => {
                let id = if id.is_empty() {
                    String::new()
                } else {
                    format!(" id=\"{}\"", escape_html(id))
                };
                format!(
                    "<tr><td colspan=\"3\" class=\"definition\"><pre{id}>{}</pre></td></tr>{nl}",
                    escape_html(text)
                )
            }
        }
    }
}

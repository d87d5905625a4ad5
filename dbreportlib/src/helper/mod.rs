//! The document assembly protocol and the common row shapes.
//!
//! [`TextFormattingHelper`] is the full operation surface a report writer
//! uses. A document is the concatenation, in call order, of:
//!
//! ```text
//! create_document_start
//!   ( create_object_start(name)
//!       rows*
//!     create_object_end )*
//! create_document_end
//! ```
//!
//! The envelope operations differ per format and are implemented by
//! [`FormattingHelper`]. The row shapes (name rows, detail rows, definition
//! rows, generic data rows) are the same composition of cells for every
//! format and are provided here on top of [`TextFormattingHelper::output_format`]
//! and [`TextFormattingHelper::options`].
//!
//! Use [`crate::Document`] to have the call order checked by the compiler.

pub mod formatter;

pub use formatter::FormattingHelper;

use crate::format::OutputFormat;
use crate::options::{DataRowLayout, FormattingOptions};
use crate::output::{Alignment, ColumnSpan, TableCell, TableRow};

/// Nominal text widths of the row shapes.
pub mod widths {
    pub const ORDINAL: usize = 2;
    pub const SUB_NAME: usize = 32;
    pub const TYPE: usize = 28;
    pub const NAME: usize = 34;
    pub const DESCRIPTION: usize = 36;
    pub const NAME_VALUE_NAME: usize = 36;
}

/// Number of columns in an empty spacer row.
pub const EMPTY_ROW_COLUMNS: usize = 4;

/// Methods to format whole rows and document envelopes.
///
/// No operation fails: blank input renders as empty content. Every string
/// returned is complete (rows carry their line separator) so callers only
/// concatenate.
pub trait TextFormattingHelper {
    /// The format every cell and row is built with.
    fn output_format(&self) -> OutputFormat;

    /// Options shared by every row.
    fn options(&self) -> &FormattingOptions;

    /// Opening envelope of the document.
    fn create_document_start(&self) -> String;

    /// Closing envelope of the document.
    fn create_document_end(&self) -> String;

    /// Section boundary before one reported database object.
    fn create_object_start(&self, name: &str) -> String;

    /// Section boundary after one reported database object.
    fn create_object_end(&self) -> String;

    /// Visual divider between logical groups of rows.
    fn create_separator_row(&self) -> String;

    /// Inline glyph for relationship direction in free text.
    fn create_arrow(&self) -> String;

    /// A block whose whitespace and line breaks are preserved.
    fn create_preformatted_text(&self, id: &str, text: &str) -> String;

    /// An empty ordinal placeholder followed by a two-column definition.
    fn create_definition_row(&self, definition: &str) -> String {
        let format = self.output_format();
        let mut row = TableRow::new(format);
        row.push(TableCell::empty(format).style_class("ordinal"));
        row.push(
            TableCell::new(format, definition)
                .span(ColumnSpan::TWO)
                .style_class("definition"),
        );
        row.render(&self.options().line_separator)
    }

    /// Ordinal, sub-name, and type of one member of an object (a column,
    /// a parameter). A blank ordinal becomes a padded placeholder.
    fn create_detail_row(&self, ordinal: &str, sub_name: &str, type_name: &str) -> String {
        let format = self.output_format();
        let ordinal = if ordinal.trim().is_empty() {
            TableCell::empty(format).aligned(Alignment::Left, widths::ORDINAL)
        } else {
            TableCell::new(format, ordinal).aligned(Alignment::Left, widths::ORDINAL)
        };

        let mut row = TableRow::new(format);
        row.push(ordinal.style_class("ordinal"));
        row.push(
            TableCell::new(format, sub_name)
                .aligned(Alignment::Left, widths::SUB_NAME)
                .style_class("subname"),
        );
        row.push(
            TableCell::new(format, type_name)
                .aligned(Alignment::Left, widths::TYPE)
                .style_class("type"),
        );
        row.render(&self.options().line_separator)
    }

    /// A spacer row of empty cells.
    fn create_empty_row(&self) -> String {
        TableRow::with_columns(self.output_format(), EMPTY_ROW_COLUMNS)
            .render(&self.options().line_separator)
    }

    /// Object name across two columns, description right-aligned after it.
    fn create_name_row(&self, name: &str, description: &str) -> String {
        let format = self.output_format();
        let mut row = TableRow::new(format);
        row.push(
            TableCell::new(format, name)
                .span(ColumnSpan::TWO)
                .aligned(Alignment::Left, widths::NAME)
                .style_class("name"),
        );
        row.push(
            TableCell::new(format, description)
                .aligned(Alignment::Right, widths::DESCRIPTION)
                .style_class("description"),
        );
        row.render(&self.options().line_separator)
    }

    /// A padded name followed by an unpadded value.
    fn create_name_value_row(&self, name: &str, value: &str) -> String {
        let format = self.output_format();
        let mut row = TableRow::new(format);
        row.push(
            TableCell::new(format, name).aligned(Alignment::Left, widths::NAME_VALUE_NAME),
        );
        row.push(TableCell::new(format, value));
        row.render(&self.options().line_separator)
    }

    /// One record of a generic data dump.
    ///
    /// `column_names` and `column_data` are expected to have the same
    /// length; only `column_data` is rendered. In text output the layout
    /// follows [`FormattingOptions::data_rows`].
    fn create_row<S: AsRef<str>>(&self, column_names: &[S], column_data: &[S]) -> String {
        debug_assert_eq!(column_names.len(), column_data.len());
        data_row(self.output_format(), self.options(), column_data, "")
    }

    /// Header record of a generic data dump.
    fn create_row_header<S: AsRef<str>>(&self, column_names: &[S]) -> String {
        data_row(self.output_format(), self.options(), column_names, "name")
    }
}

/// Render a generic data row, applying the text data-row layout.
fn data_row<S: AsRef<str>>(
    format: OutputFormat,
    options: &FormattingOptions,
    values: &[S],
    class: &str,
) -> String {
    let (format, width) = match (format, options.data_rows) {
        (OutputFormat::Text, DataRowLayout::Delimited) => (OutputFormat::Csv, 0),
        (OutputFormat::Text, DataRowLayout::FixedWidth(width)) => (OutputFormat::Text, width),
        (format, _) => (format, 0),
    };
    let mut row = TableRow::new(format);
    for value in values {
        row.push(
            TableCell::new(format, value.as_ref())
                .aligned(Alignment::Left, width)
                .style_class(class),
        );
    }
    row.render(&options.line_separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn helper(format: OutputFormat) -> FormattingHelper {
        FormattingHelper::with_options(format, FormattingOptions::new().line_separator("\n"))
    }

    #[test]
    fn test_definition_row() {
        assert_eq!(
            helper(OutputFormat::Html).create_definition_row("SELECT 1"),
            "<tr><td class=\"ordinal\"></td><td colspan=\"2\" class=\"definition\">SELECT 1</td></tr>\n"
        );
        assert_eq!(
            helper(OutputFormat::Csv).create_definition_row("a, b"),
            ",\"a, b\"\n"
        );
        assert_eq!(
            helper(OutputFormat::Text).create_definition_row("SELECT 1"),
            "SELECT 1\n"
        );
    }

    #[test]
    fn test_detail_row_text_blank_ordinal() {
        let row = helper(OutputFormat::Text).create_detail_row("", "col1", "VARCHAR");
        let expected = format!("  {:<32}{:<28}\n", "col1", "VARCHAR");
        assert_eq!(row, expected);
        assert!(row.starts_with("  col1"));
        assert_eq!(row.trim_end_matches('\n').len(), 2 + 32 + 28);
    }

    #[test]
    fn test_detail_row_text_with_ordinal() {
        let row = helper(OutputFormat::Text).create_detail_row("3", "id", "INTEGER");
        assert_eq!(row, format!("3 {:<32}{:<28}\n", "id", "INTEGER"));
        assert!(row.starts_with("3 id"));
    }

    #[test]
    fn test_detail_row_whitespace_ordinal_is_blank() {
        let row = helper(OutputFormat::Html).create_detail_row("  ", "id", "INTEGER");
        assert!(row.starts_with("<tr><td class=\"ordinal\"></td>"));
    }

    #[test]
    fn test_detail_row_html() {
        assert_eq!(
            helper(OutputFormat::Html).create_detail_row("1", "id", "INTEGER"),
            "<tr><td class=\"ordinal\">1</td><td class=\"subname\">id</td><td class=\"type\">INTEGER</td></tr>\n"
        );
    }

    #[test]
    fn test_detail_row_csv_is_unpadded() {
        assert_eq!(
            helper(OutputFormat::Csv).create_detail_row("", "price", "DECIMAL(10,2)"),
            ",price,\"DECIMAL(10,2)\"\n"
        );
    }

    #[test]
    fn test_empty_row() {
        assert_eq!(helper(OutputFormat::Csv).create_empty_row(), ",,,\n");
        let csv = helper(OutputFormat::Csv).create_empty_row();
        assert_eq!(csv.trim_end().matches(',').count(), 3);
        assert_eq!(csv.trim_end().split(',').count(), 4);
        assert_eq!(
            helper(OutputFormat::Html).create_empty_row(),
            "<tr><td></td><td></td><td></td><td></td></tr>\n"
        );
        assert_eq!(helper(OutputFormat::Text).create_empty_row(), "\n");
    }

    #[test]
    fn test_name_row() {
        let text = helper(OutputFormat::Text).create_name_row("orders", "[table]");
        assert_eq!(text, format!("{:<34}{:>36}\n", "orders", "[table]"));

        let html = helper(OutputFormat::Html).create_name_row("orders", "[table]");
        assert_eq!(
            html,
            "<tr><td colspan=\"2\" class=\"name\">orders</td><td class=\"description\">[table]</td></tr>\n"
        );

        let csv = helper(OutputFormat::Csv).create_name_row("col_a", "integer");
        assert_eq!(csv, "col_a,integer\n");
    }

    #[test]
    fn test_name_value_row() {
        let text = helper(OutputFormat::Text).create_name_value_row("owner", "sales");
        assert_eq!(text, format!("{:<36}sales\n", "owner"));

        let html = helper(OutputFormat::Html).create_name_value_row("a&b", "c");
        assert_eq!(html, "<tr><td>a&amp;b</td><td>c</td></tr>\n");
    }

    #[test]
    fn test_text_rows_downgrade_to_csv() {
        let text = helper(OutputFormat::Text);
        let csv = helper(OutputFormat::Csv);
        let names = ["a", "b"];
        let data = ["1", "2"];

        assert_eq!(text.create_row(&names, &data), csv.create_row(&names, &data));
        assert_eq!(text.create_row(&names, &data), "1,2\n");
        assert_eq!(text.create_row_header(&names), csv.create_row_header(&names));
        assert_eq!(text.create_row_header(&names), "a,b\n");
    }

    #[test]
    fn test_text_downgrade_quotes_like_csv() {
        let text = helper(OutputFormat::Text);
        assert_eq!(
            text.create_row(&["note"], &["hello, world"]),
            "\"hello, world\"\n"
        );
    }

    #[test]
    fn test_fixed_width_data_rows() {
        let text = FormattingHelper::with_options(
            OutputFormat::Text,
            FormattingOptions::new()
                .line_separator("\n")
                .data_rows(DataRowLayout::FixedWidth(6)),
        );
        assert_eq!(text.create_row_header(&["id", "name"]), "id    name  \n");
        assert_eq!(text.create_row(&["id", "name"], &["1", "a,b"]), "1     a,b   \n");
    }

    #[test]
    fn test_fixed_width_layout_ignored_outside_text() {
        let csv = FormattingHelper::with_options(
            OutputFormat::Csv,
            FormattingOptions::new()
                .line_separator("\n")
                .data_rows(DataRowLayout::FixedWidth(6)),
        );
        assert_eq!(csv.create_row(&["id"], &["1"]), "1\n");
    }

    #[test]
    fn test_html_data_rows() {
        let html = helper(OutputFormat::Html);
        assert_eq!(
            html.create_row_header(&["id", "name"]),
            "<tr><td class=\"name\">id</td><td class=\"name\">name</td></tr>\n"
        );
        assert_eq!(
            html.create_row(&["id", "name"], &["1", "<none>"]),
            "<tr><td>1</td><td>&lt;none&gt;</td></tr>\n"
        );
    }

    #[test]
    fn test_owned_strings_accepted() {
        let names = vec!["id".to_string()];
        let data = vec!["7".to_string()];
        assert_eq!(helper(OutputFormat::Csv).create_row(&names, &data), "7\n");
    }

    #[test]
    fn test_blank_input_renders_empty_content() {
        let csv = helper(OutputFormat::Csv);
        assert_eq!(csv.create_name_row("", ""), ",\n");
        assert_eq!(csv.create_name_value_row("", ""), ",\n");
        assert_eq!(csv.create_row_header::<&str>(&[]), "\n");
    }
}

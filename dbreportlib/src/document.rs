//! Document assembly with the call order enforced by types.
//!
//! A [`Document`] is open from [`Document::start`] until
//! [`Document::finish`]. Rows can only be emitted through an
//! [`ObjectSection`], which is obtained by consuming the document with
//! [`Document::object`] and gives it back on [`ObjectSection::end`]. Rows
//! outside an object, an unclosed object, or a second document end do not
//! compile.
//!
//! ```rust
//! use dbreportlib::{Document, FormattingHelper, FormattingOptions, OutputFormat};
//!
//! let helper = FormattingHelper::with_options(
//!     OutputFormat::Csv,
//!     FormattingOptions::new().line_separator("\n"),
//! );
//! let mut section = Document::start(&helper).object("orders");
//! section.name_row("id", "integer").name_row("total", "decimal");
//! let rendered = section.end().finish();
//!
//! assert_eq!(rendered.content, "orders\nid,integer\ntotal,decimal\n");
//! assert_eq!(rendered.objects, 1);
//! assert_eq!(rendered.rows, 2);
//! ```
//!
//! Each builder call renders its row completely before appending it, so a
//! document never holds a partially rendered row.

use serde::Serialize;
use std::io::Write;

use crate::format::OutputFormat;
use crate::helper::TextFormattingHelper;
use crate::Result;

/// An open document: envelope written, no object in progress.
#[derive(Debug)]
pub struct Document<'h, H: TextFormattingHelper> {
    helper: &'h H,
    content: String,
    objects: usize,
    rows: usize,
}

/// An open object section inside a document. Row builders live here.
#[derive(Debug)]
#[must_use = "an object section must be closed with `end()`"]
pub struct ObjectSection<'h, H: TextFormattingHelper> {
    document: Document<'h, H>,
}

/// A closed document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedDocument {
    /// Format the document was rendered in
    pub format: OutputFormat,
    /// The full document text
    pub content: String,
    /// Number of objects reported
    pub objects: usize,
    /// Number of logical rows emitted across all objects
    pub rows: usize,
}

impl<'h, H: TextFormattingHelper> Document<'h, H> {
    /// Open a document and write its start envelope.
    pub fn start(helper: &'h H) -> Self {
        Self {
            helper,
            content: helper.create_document_start(),
            objects: 0,
            rows: 0,
        }
    }

    /// Open a section for one database object.
    pub fn object(mut self, name: &str) -> ObjectSection<'h, H> {
        let start = self.helper.create_object_start(name);
        self.content.push_str(&start);
        self.objects += 1;
        ObjectSection { document: self }
    }

    /// Write the end envelope and close the document.
    pub fn finish(mut self) -> RenderedDocument {
        let end = self.helper.create_document_end();
        self.content.push_str(&end);
        tracing::debug!(
            format = %self.helper.output_format(),
            objects = self.objects,
            rows = self.rows,
            "document rendered"
        );
        RenderedDocument {
            format: self.helper.output_format(),
            content: self.content,
            objects: self.objects,
            rows: self.rows,
        }
    }
}

impl<'h, H: TextFormattingHelper> ObjectSection<'h, H> {
    fn push_row(&mut self, row: String) -> &mut Self {
        self.document.content.push_str(&row);
        self.document.rows += 1;
        self
    }

    /// The helper rows are built with, for inline pieces like the arrow.
    pub fn helper(&self) -> &'h H {
        self.document.helper
    }

    pub fn name_row(&mut self, name: &str, description: &str) -> &mut Self {
        let row = self.document.helper.create_name_row(name, description);
        self.push_row(row)
    }

    pub fn name_value_row(&mut self, name: &str, value: &str) -> &mut Self {
        let row = self.document.helper.create_name_value_row(name, value);
        self.push_row(row)
    }

    pub fn detail_row(&mut self, ordinal: &str, sub_name: &str, type_name: &str) -> &mut Self {
        let row = self
            .document
            .helper
            .create_detail_row(ordinal, sub_name, type_name);
        self.push_row(row)
    }

    pub fn definition_row(&mut self, definition: &str) -> &mut Self {
        let row = self.document.helper.create_definition_row(definition);
        self.push_row(row)
    }

    pub fn empty_row(&mut self) -> &mut Self {
        let row = self.document.helper.create_empty_row();
        self.push_row(row)
    }

    pub fn separator_row(&mut self) -> &mut Self {
        let row = self.document.helper.create_separator_row();
        self.push_row(row)
    }

    pub fn row_header<S: AsRef<str>>(&mut self, column_names: &[S]) -> &mut Self {
        let row = self.document.helper.create_row_header(column_names);
        self.push_row(row)
    }

    pub fn row<S: AsRef<str>>(&mut self, column_names: &[S], column_data: &[S]) -> &mut Self {
        let row = self.document.helper.create_row(column_names, column_data);
        self.push_row(row)
    }

    /// Emit a preformatted block. Counted as one row.
    pub fn preformatted(&mut self, id: &str, text: &str) -> &mut Self {
        let block = self.document.helper.create_preformatted_text(id, text);
        self.push_row(block)
    }

    /// Close the section and return to the document.
    pub fn end(mut self) -> Document<'h, H> {
        let end = self.document.helper.create_object_end();
        self.document.content.push_str(&end);
        self.document
    }
}

impl RenderedDocument {
    /// Write the document content to a sink in one call.
    pub fn write_to(&self, mut out: impl Write) -> Result<()> {
        out.write_all(self.content.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helper::FormattingHelper;
    use crate::options::FormattingOptions;

    fn helper(format: OutputFormat) -> FormattingHelper {
        FormattingHelper::with_options(format, FormattingOptions::new().line_separator("\n"))
    }

    fn two_objects(helper: &FormattingHelper) -> RenderedDocument {
        let mut t1 = Document::start(helper).object("T1");
        t1.name_row("col_a", "integer");
        let mut t2 = t1.end().object("T2");
        t2.name_row("col_b", "varchar");
        t2.end().finish()
    }

    #[test]
    fn test_empty_document() {
        let rendered = Document::start(&helper(OutputFormat::Csv)).finish();
        assert_eq!(rendered.content, "");
        assert_eq!(rendered.objects, 0);
        assert_eq!(rendered.rows, 0);
    }

    #[test]
    fn test_csv_two_objects() {
        let rendered = two_objects(&helper(OutputFormat::Csv));
        assert_eq!(rendered.content, "T1\ncol_a,integer\nT2\ncol_b,varchar\n");
        assert_eq!(rendered.format, OutputFormat::Csv);
    }

    #[test]
    fn test_html_two_objects_balanced() {
        let rendered = two_objects(&helper(OutputFormat::Html));
        let html = &rendered.content;
        assert_eq!(html.matches("<table>").count(), 2);
        assert_eq!(html.matches("</table>").count(), 2);
        assert_eq!(html.matches("<tr>").count(), html.matches("</tr>").count());
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_row_count_is_format_independent() {
        let counts: Vec<(usize, usize)> = OutputFormat::ALL
            .iter()
            .map(|f| {
                let r = two_objects(&helper(*f));
                (r.objects, r.rows)
            })
            .collect();
        assert!(counts.iter().all(|c| *c == (2, 2)));
    }

    #[test]
    fn test_section_builders_count_rows() {
        let helper = helper(OutputFormat::Text);
        let mut section = Document::start(&helper).object("orders");
        section
            .name_row("orders", "[table]")
            .detail_row("1", "id", "INTEGER")
            .definition_row("primary ledger")
            .separator_row()
            .name_value_row("owner", "sales")
            .empty_row()
            .row_header(&["id"])
            .row(&["id"], &["1"])
            .preformatted("src", "SELECT 1");
        let rendered = section.end().finish();
        assert_eq!(rendered.rows, 9);
        assert!(rendered.content.contains("SELECT 1\n"));
    }

    #[test]
    fn test_section_exposes_helper_arrow() {
        let helper = helper(OutputFormat::Text);
        let mut section = Document::start(&helper).object("orders");
        let target = format!("customer_id{}customers.id", section.helper().create_arrow());
        section.detail_row("", "fk_customer", &target);
        let rendered = section.end().finish();
        assert!(rendered.content.contains("customer_id --> customers.id"));
    }

    #[test]
    fn test_write_to() {
        let rendered = two_objects(&helper(OutputFormat::Csv));
        let mut buffer = Vec::new();
        rendered.write_to(&mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), rendered.content);
    }
}

//! An ordered group of cells rendered as one output line.

use crate::error::ReportError;
use crate::format::OutputFormat;
use crate::output::cell::TableCell;
use crate::Result;

/// One logical report line.
///
/// Cells are appended with [`TableRow::add`], which checks that every cell
/// shares the row's format and that a declared column count is not exceeded.
/// When a column count is declared, rendering fills any unused columns with
/// empty placeholder cells.
///
/// ```rust
/// use dbreportlib::{OutputFormat, TableCell, TableRow};
///
/// let mut row = TableRow::new(OutputFormat::Csv);
/// row.add(TableCell::new(OutputFormat::Csv, "id"))?;
/// row.add(TableCell::new(OutputFormat::Csv, "INTEGER, NOT NULL"))?;
/// assert_eq!(row.render("\n"), "id,\"INTEGER, NOT NULL\"\n");
///
/// let spacer = TableRow::with_columns(OutputFormat::Csv, 4);
/// assert_eq!(spacer.render("\n"), ",,,\n");
/// # Ok::<(), dbreportlib::ReportError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    format: OutputFormat,
    cells: Vec<TableCell>,
    declared_columns: Option<usize>,
}

impl TableRow {
    /// Create an empty row whose width is set by the cells added to it.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            cells: Vec::new(),
            declared_columns: None,
        }
    }

    /// Create an empty row with a fixed number of columns.
    pub fn with_columns(format: OutputFormat, columns: usize) -> Self {
        Self {
            format,
            cells: Vec::new(),
            declared_columns: Some(columns),
        }
    }

    /// Append a cell.
    ///
    /// Fails if the cell was built for a different format, or if its span
    /// would take the row past its declared column count.
    pub fn add(&mut self, cell: TableCell) -> Result<&mut Self> {
        if cell.format() != self.format {
            return Err(ReportError::FormatMismatch {
                row: self.format,
                cell: cell.format(),
            });
        }
        if let Some(declared) = self.declared_columns {
            let used = self.column_count() + cell.column_span().get();
            if used > declared {
                return Err(ReportError::ColumnOverflow { declared, used });
            }
        }
        self.cells.push(cell);
        Ok(self)
    }

    /// Append a cell built by this crate's row-shape helpers, which always
    /// use the row's own format and never declare a column count.
    pub(crate) fn push(&mut self, cell: TableCell) -> &mut Self {
        debug_assert_eq!(cell.format(), self.format);
        debug_assert!(self.declared_columns.is_none());
        self.cells.push(cell);
        self
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn cells(&self) -> &[TableCell] {
        &self.cells
    }

    pub fn declared_columns(&self) -> Option<usize> {
        self.declared_columns
    }

    /// Sum of the column spans of the cells added so far.
    pub fn column_count(&self) -> usize {
        self.cells.iter().map(|c| c.column_span().get()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Render the row, terminated by `line_separator`.
    pub fn render(&self, line_separator: &str) -> String {
        let placeholders = self
            .declared_columns
            .map(|declared| declared.saturating_sub(self.column_count()))
            .unwrap_or(0);
        let rendered = self
            .cells
            .iter()
            .map(TableCell::render)
            .chain((0..placeholders).map(|_| TableCell::empty(self.format).render()));

        let mut line = match self.format {
            OutputFormat::Text => rendered.collect::<String>(),
            OutputFormat::Html => format!("<tr>{}</tr>", rendered.collect::<String>()),
            OutputFormat::Csv => rendered.collect::<Vec<_>>().join(","),
        };
        line.push_str(line_separator);
        line
    }
}

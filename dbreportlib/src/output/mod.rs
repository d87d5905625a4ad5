//! Output primitives: cells and rows.
//!
//! These are the leaf renderers every document is built from. Each carries
//! the active [`OutputFormat`](crate::OutputFormat) and renders itself to a
//! string with that format's rules:
//!
//! - **TableCell**: one field (padding, html escaping, csv quoting)
//! - **TableRow**: an ordered group of cells rendered as one line
//!
//! Row-shape helpers in [`crate::helper`] decide how many cells each row
//! gets; the primitives never duplicate or split content on their own.
//!
//! ## Example
//!
//! ```rust
//! use dbreportlib::output::{TableCell, TableRow};
//! use dbreportlib::OutputFormat;
//!
//! let format = OutputFormat::Html;
//! let mut row = TableRow::new(format);
//! row.add(TableCell::new(format, "orders").style_class("name"))?;
//! assert_eq!(row.render(""), r#"<tr><td class="name">orders</td></tr>"#);
//! # Ok::<(), dbreportlib::ReportError>(())
//! ```

pub mod cell;
pub mod row;

pub use cell::{escape_csv, escape_html, Alignment, ColumnSpan, TableCell};
pub use row::TableRow;

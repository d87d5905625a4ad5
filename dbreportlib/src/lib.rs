//! # dbreportlib
//!
//! A format-agnostic table renderer for database metadata reports.
//!
//! ## Overview
//!
//! Report writers describe database objects (tables, views, routines) as
//! rows of cells. This library turns those rows into one of three textual
//! representations through a single call sequence, so the writer never
//! needs to know which format is active:
//!
//! - **Text**: fixed-width plain text, columns aligned by padding
//! - **Html**: one `<table>` per object, escaped content, css classes
//! - **Csv**: comma-separated records with RFC 4180 style quoting
//!
//! ## Pipeline
//!
//! 1. [`OutputFormat`]: chosen once per report
//! 2. [`TableCell`] / [`TableRow`]: leaf renderers bound to that format
//! 3. [`TextFormattingHelper`]: document envelope and common row shapes
//! 4. [`Document`]: assembles a complete document in a checked call order
//!
//! Every step is a pure function of its inputs. Nothing here performs I/O
//! except [`source`], which opens report input for callers.
//!
//! ## Example
//!
//! ```rust
//! use dbreportlib::{Document, FormattingHelper, FormattingOptions, OutputFormat};
//!
//! let helper = FormattingHelper::with_options(
//!     OutputFormat::Html,
//!     FormattingOptions::new().line_separator("\n").title("Sales schema"),
//! );
//!
//! let mut orders = Document::start(&helper).object("orders");
//! orders
//!     .name_row("orders", "[table]")
//!     .detail_row("1", "id", "INTEGER")
//!     .detail_row("2", "total", "DECIMAL(10,2)");
//! let rendered = orders.end().finish();
//!
//! assert!(rendered.content.contains("<caption>orders</caption>"));
//! assert!(rendered.content.contains(r#"<td class="subname">total</td>"#));
//! assert_eq!(rendered.rows, 3);
//! ```

pub mod document;
pub mod error;
pub mod format;
pub mod helper;
pub mod options;
pub mod output;
pub mod pad;
pub mod source;

pub use document::{Document, ObjectSection, RenderedDocument};
pub use error::ReportError;
pub use format::OutputFormat;
pub use helper::{FormattingHelper, TextFormattingHelper};
pub use options::{DataRowLayout, FormattingOptions, LINE_SEPARATOR};
pub use output::{Alignment, ColumnSpan, TableCell, TableRow};
pub use source::{Charset, FileInputResource, InputResource};

/// Result type for dbreportlib operations
pub type Result<T> = std::result::Result<T, ReportError>;

//! Error types for dbreportlib

use std::path::PathBuf;
use thiserror::Error;

use crate::format::OutputFormat;

/// Errors that can occur while building or reading report documents
#[derive(Error, Debug)]
pub enum ReportError {
    /// A column span of zero was requested
    #[error("invalid column span {0}: a cell must span at least one column")]
    InvalidColumnSpan(usize),

    /// A cell built for one format was added to a row of another
    #[error("cannot add a {cell} cell to a {row} row")]
    FormatMismatch {
        row: OutputFormat,
        cell: OutputFormat,
    },

    /// Cells span more columns than the row declared
    #[error("row declares {declared} columns but cells span {used}")]
    ColumnOverflow { declared: usize, used: usize },

    /// Unknown output format name
    #[error("unknown output format '{0}' (expected text, html, or csv)")]
    UnknownFormat(String),

    /// Unknown character set name
    #[error("unknown charset '{0}' (expected utf-8 or iso-8859-1)")]
    UnknownCharset(String),

    /// Failed to read an input file
    #[error("cannot read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

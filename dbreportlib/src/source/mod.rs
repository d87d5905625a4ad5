//! Input sources: where report input is read from.
//!
//! The renderer itself never reads anything. This module provides the
//! readable-stream abstraction callers use to load report input:
//!
//! - **InputResource**: anything that can open a fresh reader in a charset
//! - **FileInputResource**: a file path, optionally tolerant of absence
//!
//! ## Example
//!
//! ```rust,no_run
//! use dbreportlib::source::{Charset, FileInputResource, InputResource};
//! use std::io::Read;
//!
//! let resource = FileInputResource::allow_empty("catalog.json")?;
//! let mut text = String::new();
//! resource.open_new_input_reader(Charset::Utf8)?.read_to_string(&mut text)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod file;

pub use file::{Charset, FileInputResource};

use std::io::BufRead;

use crate::Result;

/// A readable character source that can be opened more than once.
pub trait InputResource {
    /// Open a new reader over the resource, decoding with `charset`.
    /// The returned reader always yields UTF-8.
    fn open_new_input_reader(&self, charset: Charset) -> Result<Box<dyn BufRead>>;

    /// Human-readable name of the resource, for messages.
    fn description(&self) -> String;
}

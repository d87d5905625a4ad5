//! Shared helpers for integration tests.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use dbreportlib::LINE_SEPARATOR;
use tempfile::NamedTempFile;

/// A writer that captures everything written to it in a temporary file.
///
/// Lets tests check both the captured text and that a report can be
/// streamed to a real file.
pub struct TestWriter {
    out: NamedTempFile,
}

impl TestWriter {
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            out: NamedTempFile::new()?,
        })
    }

    /// Write `text` followed by the platform line separator.
    pub fn println(&mut self, text: impl fmt::Display) -> io::Result<()> {
        self.writeout(&format!("{text}{LINE_SEPARATOR}"))
    }

    pub fn file_path(&self) -> &Path {
        self.out.path()
    }

    /// Everything written so far.
    pub fn file_contents(&mut self) -> io::Result<String> {
        self.out.flush()?;
        fs::read_to_string(self.out.path())
    }

    fn writeout(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())
    }
}

impl Write for TestWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.out.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl fmt::Write for TestWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.writeout(s).map_err(|_| fmt::Error)
    }
}

//! File-backed input resources.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Read};
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;

use crate::error::ReportError;
use crate::source::InputResource;
use crate::Result;

/// Character set used to decode an input resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Charset {
    /// UTF-8, streamed as-is
    #[default]
    Utf8,
    /// ISO-8859-1, one byte per char
    Latin1,
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Charset::Utf8 => f.write_str("UTF-8"),
            Charset::Latin1 => f.write_str("ISO-8859-1"),
        }
    }
}

impl FromStr for Charset {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Charset::Utf8),
            "iso-8859-1" | "iso8859-1" | "latin1" | "latin-1" => Ok(Charset::Latin1),
            _ => Err(ReportError::UnknownCharset(s.to_string())),
        }
    }
}

/// An input file, resolved to an absolute normalized path.
///
/// [`FileInputResource::new`] requires the file to be readable up front.
/// [`FileInputResource::allow_empty`] skips that check, and opening a
/// missing file then yields an empty reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInputResource {
    input_file: PathBuf,
    allow_empty_file: bool,
}

impl FileInputResource {
    /// Resolve `path` and check that it is a readable file.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let input_file = resolve(path.as_ref())?;
        if let Err(source) = File::open(&input_file).and_then(|f| {
            if f.metadata()?.is_file() {
                Ok(())
            } else {
                Err(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "not a regular file",
                ))
            }
        }) {
            tracing::debug!(path = %input_file.display(), error = %source, "cannot read input file");
            return Err(ReportError::FileRead {
                path: input_file,
                source,
            });
        }
        Ok(Self {
            input_file,
            allow_empty_file: false,
        })
    }

    /// Resolve `path` without checking it; a missing file reads as empty.
    pub fn allow_empty(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            input_file: resolve(path.as_ref())?,
            allow_empty_file: true,
        })
    }

    pub fn input_file(&self) -> &Path {
        &self.input_file
    }

    pub fn allows_empty_file(&self) -> bool {
        self.allow_empty_file
    }
}

impl InputResource for FileInputResource {
    fn open_new_input_reader(&self, charset: Charset) -> Result<Box<dyn BufRead>> {
        if self.allow_empty_file && !self.input_file.exists() {
            tracing::debug!(path = %self.input_file.display(), "input file missing, reading as empty");
            return Ok(Box::new(Cursor::new(Vec::new())));
        }

        let file = File::open(&self.input_file).map_err(|source| ReportError::FileRead {
            path: self.input_file.clone(),
            source,
        })?;
        tracing::info!(path = %self.input_file.display(), %charset, "opened input reader");

        match charset {
            Charset::Utf8 => Ok(Box::new(BufReader::new(file))),
            Charset::Latin1 => {
                let mut bytes = Vec::new();
                BufReader::new(file)
                    .read_to_end(&mut bytes)
                    .map_err(|source| ReportError::FileRead {
                        path: self.input_file.clone(),
                        source,
                    })?;
                let decoded: String = bytes.iter().map(|b| char::from(*b)).collect();
                Ok(Box::new(Cursor::new(decoded.into_bytes())))
            }
        }
    }

    fn description(&self) -> String {
        self.input_file.display().to_string()
    }
}

impl fmt::Display for FileInputResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.input_file.display())
    }
}

/// Make `path` absolute and drop `.` and `..` components lexically.
fn resolve(path: &Path) -> Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    Ok(normalized)
}

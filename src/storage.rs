// src/storage.rs - File access used by the editor session

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Reads and writes whole text files.
pub trait FileStore {
    fn read_text(&self, path: &Path) -> io::Result<String>;
    fn write_text(&self, path: &Path, text: &str) -> io::Result<()>;
}

/// `FileStore` backed by the local filesystem.
///
/// Files are decoded as UTF-8; invalid sequences become U+FFFD so any byte
/// sequence can be opened.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskStore;

impl FileStore for DiskStore {
    fn read_text(&self, path: &Path) -> io::Result<String> {
        let bytes = fs::read(path)?;
        Ok(match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
        })
    }

    fn write_text(&self, path: &Path, text: &str) -> io::Result<()> {
        fs::write(path, text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOp {
    Opening,
    Saving,
}

impl fmt::Display for FileOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileOp::Opening => write!(f, "opening"),
            FileOp::Saving => write!(f, "saving"),
        }
    }
}

/// The single failure the session knows about: a read or write that the
/// operating system refused.
#[derive(Debug, Error)]
#[error("Error {op} file: {source}")]
pub struct FileAccessError {
    pub op: FileOp,
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

impl FileAccessError {
    pub fn new(op: FileOp, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self {
            op,
            path: path.into(),
            source,
        }
    }
}

//! Suppliers of equation text. Every `open` hands out a fresh reader, so a
//! source can be read once per solve.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor, Read};
use std::path::PathBuf;

use crate::error::IoError;

pub trait EquationSource {
    /// Human-readable name used in error messages.
    fn name(&self) -> String;

    fn open(&self) -> Result<Box<dyn BufRead + '_>, IoError>;

    fn read_lines(&self) -> Result<Vec<String>, IoError> {
        let reader = self.open()?;
        reader
            .lines()
            .collect::<io::Result<Vec<_>>>()
            .map_err(|e| IoError::read_error(self.name(), e))
    }
}

/// Equations held in memory.
#[derive(Debug, Clone)]
pub struct TextSource {
    text: String,
}

impl TextSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl EquationSource for TextSource {
    fn name(&self) -> String {
        "<text>".to_string()
    }

    fn open(&self) -> Result<Box<dyn BufRead + '_>, IoError> {
        Ok(Box::new(Cursor::new(self.text.as_bytes())))
    }
}

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl EquationSource for FileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn open(&self) -> Result<Box<dyn BufRead + '_>, IoError> {
        let file = File::open(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => IoError::file_not_found(&self.path),
            _ => IoError::open_error(self.name(), e),
        })?;
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Wraps a closure that produces a new reader on every call.
pub struct ReaderSource<F> {
    name: String,
    supplier: F,
}

impl<F, R> ReaderSource<F>
where
    F: Fn() -> io::Result<R>,
    R: Read,
{
    pub fn new(name: impl Into<String>, supplier: F) -> Self {
        Self {
            name: name.into(),
            supplier,
        }
    }
}

impl<F, R> EquationSource for ReaderSource<F>
where
    F: Fn() -> io::Result<R>,
    R: Read + 'static,
{
    fn name(&self) -> String {
        self.name.clone()
    }

    fn open(&self) -> Result<Box<dyn BufRead + '_>, IoError> {
        let reader = (self.supplier)().map_err(|e| IoError::open_error(self.name(), e))?;
        Ok(Box::new(BufReader::new(reader)))
    }
}

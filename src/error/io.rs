use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IoError {
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to open '{source_name}': {source}")]
    OpenError {
        source_name: String,
        source: std::io::Error,
    },

    #[error("failed to read '{source_name}': {source}")]
    ReadError {
        source_name: String,
        source: std::io::Error,
    },

    #[error("failed to write file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl IoError {
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    pub fn open_error(source_name: impl Into<String>, source: std::io::Error) -> Self {
        Self::OpenError {
            source_name: source_name.into(),
            source,
        }
    }

    pub fn read_error(source_name: impl Into<String>, source: std::io::Error) -> Self {
        Self::ReadError {
            source_name: source_name.into(),
            source,
        }
    }

    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteError {
            path: path.into(),
            source,
        }
    }
}

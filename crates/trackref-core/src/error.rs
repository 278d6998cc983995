//! Error types for trackref-core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reconciling a reference table
#[derive(Debug, Error)]
pub enum Error {
    /// The reference table does not exist
    #[error("reference table '{path}' not found")]
    InputNotFound { path: PathBuf },

    /// Failed to read the reference table
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error from the csv crate
    #[error("CSV error in '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A required column is absent from the header
    #[error("required column '{column}' missing from '{path}'")]
    MissingColumn { path: PathBuf, column: String },

    /// The table is readable but structurally invalid
    #[error("malformed reference table '{path}': {message}")]
    InputMalformed { path: PathBuf, message: String },

    /// Audio directory is absent or not a directory
    #[error("audio directory '{path}' not found or not a directory")]
    DirectoryNotFound { path: PathBuf },

    /// Directory listing error
    #[error("failed to list audio directory: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// Failed to write the filtered table
    #[error("failed to write filtered table '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Coarse classification of an [`Error`] by the step that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InputNotFound,
    InputMalformed,
    DirectoryNotFound,
    OutputWriteError,
}

impl Error {
    /// Which step of the run this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InputNotFound { .. } => ErrorKind::InputNotFound,
            Error::FileRead { .. }
            | Error::Csv { .. }
            | Error::MissingColumn { .. }
            | Error::InputMalformed { .. } => ErrorKind::InputMalformed,
            Error::DirectoryNotFound { .. } | Error::WalkDir(_) => ErrorKind::DirectoryNotFound,
            Error::OutputWrite { .. } | Error::Io(_) | Error::Json(_) => {
                ErrorKind::OutputWriteError
            }
        }
    }
}

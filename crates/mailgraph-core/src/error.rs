//! Error types for the I/O boundary. Core graph and ledger operations never fail.

use std::path::PathBuf;
use thiserror::Error;

/// Failures raised while reading the mail log or writing reports.
#[derive(Debug, Error)]
pub enum Error {
    /// The input file could not be opened.
    #[error("input file not found or unreadable: {}", path.display())]
    DatasetUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading stopped part-way through; earlier records were already ingested.
    #[error("failed reading {} at line {line} after {ingested} records", path.display())]
    DatasetRead {
        path: PathBuf,
        line: usize,
        ingested: usize,
        #[source]
        source: std::io::Error,
    },

    /// A report sink could not be created or written.
    #[error("cannot write to {}", path.display())]
    SinkUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn sink(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SinkUnwritable {
            path: path.into(),
            source,
        }
    }

    /// Whether the failure came from the input side.
    pub fn is_input(&self) -> bool {
        matches!(
            self,
            Self::DatasetUnavailable { .. } | Self::DatasetRead { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

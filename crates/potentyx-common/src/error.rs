use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PotentyxError {
    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Input file {0} has no header row")]
    EmptyInput(PathBuf),

    #[error("{source_name} export is missing required column '{column}'. Columns found: {available:?}")]
    MissingColumn {
        source_name: String,
        column: String,
        available: Vec<String>,
    },

    #[error("Cannot detect PubChem {role} column. Columns found: {available:?}")]
    ColumnDetection {
        role: String,
        available: Vec<String>,
    },

    #[error("Plot error: {0}")]
    Plot(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PotentyxError {
    /// Wrap an I/O failure together with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, PotentyxError>;

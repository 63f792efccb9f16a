use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("data directory not found: {}", path.display())]
    DirectoryNotFound { path: PathBuf },
    #[error("read csv {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        source: csv::Error,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;

use std::path::PathBuf;

use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("frame operation failed: {0}")]
    Polars(#[from] PolarsError),
    #[error("write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("nothing to combine: no city produced any records")]
    NothingToCombine,
}

pub type Result<T> = std::result::Result<T, TransformError>;

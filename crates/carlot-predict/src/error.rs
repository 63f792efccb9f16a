use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PredictError {
    #[error("read model {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("parse model {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("model declares {columns} columns but {coefficients} coefficients")]
    ArityMismatch { columns: usize, coefficients: usize },
    #[error("model column {column:?} cannot be produced from the serving schema")]
    SchemaMismatch { column: String },
}

pub type Result<T> = std::result::Result<T, PredictError>;

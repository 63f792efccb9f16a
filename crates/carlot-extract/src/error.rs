use thiserror::Error;

/// Why one row failed to yield a record.
///
/// These abort only the row they occur in; the assembler logs them against
/// the row's link and moves on.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("parse {blob} blob: {source}")]
    BlobParse {
        blob: &'static str,
        source: serde_json::Error,
    },
    #[error("registration year is not an integer: {0:?}")]
    InvalidRegistrationYear(String),
}

pub type Result<T> = std::result::Result<T, ExtractError>;

//! Structured dataset persistence and cross-city combination.

use std::fs::File;
use std::path::Path;

use polars::functions::concat_df_diagonal;
use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use tracing::info;

use crate::error::{Result, TransformError};

/// Write one dataset as CSV.
pub fn write_csv(frame: &mut DataFrame, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| TransformError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    CsvWriter::new(file)
        .include_header(true)
        .finish(frame)?;
    info!(path = %path.display(), rows = frame.height(), "dataset written");
    Ok(())
}

/// Concatenate completed per-city frames into the combined dataset.
///
/// Column-unioned: a column present in only some frames is null-padded in
/// the others, which matters once per-city frames are encoded separately.
pub fn combine_frames(frames: &[DataFrame]) -> Result<DataFrame> {
    if frames.is_empty() {
        return Err(TransformError::NothingToCombine);
    }
    Ok(concat_df_diagonal(frames)?)
}

//! Dataset build pipeline with explicit stages.
//!
//! The pipeline follows these stages in order, one city at a time:
//! 1. **Discover**: match configured city files against the data directory
//! 2. **Ingest**: read the city's CSV export
//! 3. **Assemble**: extract one record per parseable row, stamp the city
//! 4. **Impute**: fill missing values column by column
//! 5. **Output**: write `<City>_structured.csv`
//!
//! After every city completes, the finished frames are concatenated
//! column-unioned into `All_Cities.csv`. A city that cannot be read
//! contributes nothing; the batch never aborts for one source.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::{info, info_span, warn};

use carlot_ingest::{discover_city_files, read_listing_table};
use carlot_model::{COMBINED_FILENAME, SourceConfig, structured_filename};
use carlot_transform::{assemble_city, combine_frames, fill_missing, one_hot_encode, write_csv};

use crate::types::{BuildOutcome, CityOutcome};

/// Options for one build run.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Where structured files are written.
    pub output_dir: std::path::PathBuf,
    /// One-hot encode categorical columns in the written datasets.
    pub encode: bool,
}

/// Run the whole batch: every configured city, then the combined file.
pub fn run_build(config: &SourceConfig, options: &BuildOptions) -> Result<BuildOutcome> {
    std::fs::create_dir_all(&options.output_dir).with_context(|| {
        format!("create output directory {}", options.output_dir.display())
    })?;

    let discovered = discover_city_files(config).context("discover city files")?;
    let mut outcomes = Vec::with_capacity(discovered.present.len());
    let mut finished_frames: Vec<DataFrame> = Vec::new();

    for city_file in &discovered.present {
        let span = info_span!("city", city = %city_file.label);
        let _guard = span.enter();
        let start = Instant::now();

        let (frame, outcome) = process_city(
            &city_file.path,
            &city_file.label,
            &options.output_dir,
            options.encode,
        )
        .with_context(|| format!("process {}", city_file.label))?;

        info!(
            city = %city_file.label,
            records = outcome.records,
            dropped = outcome.failures,
            duration_ms = start.elapsed().as_millis(),
            "structured data written"
        );
        finished_frames.push(frame);
        outcomes.push(outcome);
    }

    let (combined_rows, combined_path) = if finished_frames.is_empty() {
        warn!("no city produced any data; skipping combined output");
        (0, None)
    } else {
        let mut combined = combine_frames(&finished_frames).context("combine city frames")?;
        let path = options.output_dir.join(COMBINED_FILENAME);
        write_csv(&mut combined, &path).context("write combined dataset")?;
        info!(rows = combined.height(), path = %path.display(), "combined dataset written");
        (combined.height(), Some(path))
    };

    Ok(BuildOutcome {
        cities: outcomes,
        missing: discovered.missing,
        combined_rows,
        combined_path,
    })
}

/// Ingest, assemble, impute, optionally encode, and persist one city.
fn process_city(
    path: &Path,
    city: &str,
    output_dir: &Path,
    encode: bool,
) -> Result<(DataFrame, CityOutcome)> {
    let table = read_listing_table(path).with_context(|| format!("read {}", path.display()))?;
    let dataset = assemble_city(&table, city).context("assemble records")?;

    let mut frame = dataset.frame;
    let fills = fill_missing(&mut frame).context("impute missing values")?;
    if encode {
        frame = one_hot_encode(&frame).context("one-hot encode")?;
    }

    let output_path = output_dir.join(structured_filename(city));
    write_csv(&mut frame, &output_path)
        .with_context(|| format!("write {}", output_path.display()))?;

    let outcome = CityOutcome {
        city: city.to_string(),
        input_rows: dataset.input_rows,
        records: frame.height(),
        failures: dataset.failures.len(),
        output_path,
        fills,
    };
    Ok((frame, outcome))
}

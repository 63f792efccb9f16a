//! Per-city dataset assembly.

use polars::prelude::DataFrame;
use tracing::{debug, warn};

use carlot_extract::{RawListing, extract_listing};
use carlot_ingest::ListingTable;
use carlot_model::schema;

use crate::error::Result;
use crate::frame::records_to_frame;

/// One row that failed extraction, identified by its link.
#[derive(Debug, Clone)]
pub struct RowFailure {
    pub link: String,
    pub reason: String,
}

/// Assembled (not yet imputed) dataset for one city.
#[derive(Debug)]
pub struct CityDataset {
    pub city: String,
    pub frame: DataFrame,
    pub failures: Vec<RowFailure>,
    pub input_rows: usize,
}

impl CityDataset {
    pub fn record_count(&self) -> usize {
        self.frame.height()
    }
}

/// Extract every row of a city export, stamping the city label.
///
/// Failed rows are logged against their link and collected; they are omitted
/// from the frame, so the output height is input rows minus failures. Row
/// order is preserved.
pub fn assemble_city(table: &ListingTable, city: &str) -> Result<CityDataset> {
    let mut records = Vec::with_capacity(table.row_count());
    let mut failures = Vec::new();
    for row in 0..table.row_count() {
        let link_cell = table.cell(row, schema::SOURCE_LINK);
        let raw = RawListing {
            detail: table.cell(row, schema::SOURCE_DETAIL),
            overview: table.cell(row, schema::SOURCE_OVERVIEW),
            features: table.cell(row, schema::SOURCE_FEATURES),
            specs: table.cell(row, schema::SOURCE_SPECS),
            link: (!link_cell.is_empty()).then_some(link_cell),
        };
        match extract_listing(&raw) {
            Ok(mut record) => {
                record.city = city.to_string();
                records.push(record);
            }
            Err(error) => {
                let link = raw.link_or_unknown().to_string();
                warn!(city, link = %link, error = %error, "row extraction failed");
                failures.push(RowFailure {
                    link,
                    reason: error.to_string(),
                });
            }
        }
    }
    debug!(
        city,
        input_rows = table.row_count(),
        records = records.len(),
        failures = failures.len(),
        "city assembled"
    );
    let frame = records_to_frame(&records)?;
    Ok(CityDataset {
        city: city.to_string(),
        frame,
        failures,
        input_rows: table.row_count(),
    })
}

pub mod config;
pub mod prediction;
pub mod record;
pub mod schema;
pub mod vocab;

pub use config::{COMBINED_FILENAME, CitySource, SourceConfig, structured_filename};
pub use prediction::{PredictionRequest, PredictionResponse, UnknownCategory};
pub use record::ListingRecord;
pub use schema::{COLUMNS, NUMERIC_COLUMNS};

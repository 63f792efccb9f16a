pub mod csv_table;
pub mod discovery;
pub mod error;

pub use csv_table::{ListingTable, read_listing_table};
pub use discovery::{CityFile, DiscoveredSources, discover_city_files};
pub use error::{IngestError, Result};

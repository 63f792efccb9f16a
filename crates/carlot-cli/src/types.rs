use std::path::PathBuf;

use carlot_transform::ColumnFill;

/// Result of a full dataset build.
#[derive(Debug)]
pub struct BuildOutcome {
    pub cities: Vec<CityOutcome>,
    /// Configured cities whose source file was absent.
    pub missing: Vec<String>,
    /// Rows in the combined dataset; zero when nothing was readable.
    pub combined_rows: usize,
    pub combined_path: Option<PathBuf>,
}

impl BuildOutcome {
    pub fn total_failures(&self) -> usize {
        self.cities.iter().map(|city| city.failures).sum()
    }
}

/// Per-city build summary.
#[derive(Debug)]
pub struct CityOutcome {
    pub city: String,
    pub input_rows: usize,
    pub records: usize,
    pub failures: usize,
    pub output_path: PathBuf,
    pub fills: Vec<ColumnFill>,
}

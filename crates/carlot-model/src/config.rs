//! Source configuration: where the raw exports live and which cities to load.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One configured city source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitySource {
    /// City label stamped onto every record from this file, e.g. "Chennai".
    pub label: String,
    /// Expected filename under the data directory, e.g. "chennai_cars.csv".
    pub filename: String,
}

impl CitySource {
    /// Build a city source following the `<city-lowercase>_cars.csv` convention.
    pub fn from_label(label: impl Into<String>) -> Self {
        let label = label.into();
        let filename = format!("{}_cars.csv", label.to_lowercase());
        Self { label, filename }
    }
}

/// Configuration for a dataset build run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Directory containing the per-city export files.
    pub data_dir: PathBuf,
    /// Cities to process, in output order.
    pub cities: Vec<CitySource>,
}

impl SourceConfig {
    /// Default city set for the standard six-city dataset.
    pub fn with_default_cities(data_dir: impl Into<PathBuf>) -> Self {
        let cities = [
            "Bangalore",
            "Chennai",
            "Delhi",
            "Hyderabad",
            "Jaipur",
            "Kolkata",
        ]
        .into_iter()
        .map(CitySource::from_label)
        .collect();
        Self {
            data_dir: data_dir.into(),
            cities,
        }
    }

    /// Absolute path of a city's source file.
    pub fn city_path(&self, city: &CitySource) -> PathBuf {
        self.data_dir.join(&city.filename)
    }
}

/// Output filename for one city's structured dataset.
pub fn structured_filename(city_label: &str) -> String {
    format!("{city_label}_structured.csv")
}

/// Output filename for the combined dataset.
pub const COMBINED_FILENAME: &str = "All_Cities.csv";

#[cfg(test)]
mod tests {
    use super::{CitySource, SourceConfig, structured_filename};

    #[test]
    fn default_cities_follow_filename_convention() {
        let config = SourceConfig::with_default_cities("/data");
        assert_eq!(config.cities.len(), 6);
        let chennai = &config.cities[1];
        assert_eq!(chennai.label, "Chennai");
        assert_eq!(chennai.filename, "chennai_cars.csv");
        assert_eq!(
            config.city_path(chennai),
            std::path::PathBuf::from("/data/chennai_cars.csv")
        );
    }

    #[test]
    fn structured_filename_keeps_label_case() {
        assert_eq!(structured_filename("Delhi"), "Delhi_structured.csv");
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = SourceConfig {
            data_dir: "/exports".into(),
            cities: vec![CitySource::from_label("Pune")],
        };
        let json = serde_json::to_string(&config).expect("serialize config");
        let round: SourceConfig = serde_json::from_str(&json).expect("deserialize config");
        assert_eq!(round, config);
    }
}

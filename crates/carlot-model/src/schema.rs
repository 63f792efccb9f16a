//! Column schema shared by the assembler, imputer, and output writers.

/// Source CSV column carrying the detail blob.
pub const SOURCE_DETAIL: &str = "new_car_detail";
/// Source CSV column carrying the overview blob.
pub const SOURCE_OVERVIEW: &str = "new_car_overview";
/// Source CSV column carrying the feature blob.
pub const SOURCE_FEATURES: &str = "new_car_feature";
/// Source CSV column carrying the specs blob.
pub const SOURCE_SPECS: &str = "new_car_specs";
/// Source CSV column carrying the listing URL.
pub const SOURCE_LINK: &str = "car_links";

/// Output columns in frame and CSV order.
///
/// The order matches the structured exports consumers already depend on:
/// extractor fields first, the assembler-stamped `City` last.
pub const COLUMNS: [&str; 16] = [
    "fuel_type",
    "body_type",
    "km_driven",
    "owner",
    "price",
    "manufacturing_year",
    "link",
    "features",
    "oem",
    "model",
    "registration_year",
    "Mileage",
    "Seats",
    "transmission",
    "variantName",
    "City",
];

/// Columns stored as nullable Float64 in the assembled frame.
///
/// Integer-valued fields ride along as floats so mean imputation can fill
/// them without a lossy cast, matching the prior pipeline's output files.
pub const NUMERIC_COLUMNS: [&str; 5] = [
    "km_driven",
    "price",
    "manufacturing_year",
    "registration_year",
    "Mileage",
];

#[cfg(test)]
mod tests {
    use super::{COLUMNS, NUMERIC_COLUMNS};

    #[test]
    fn numeric_columns_are_output_columns() {
        for column in NUMERIC_COLUMNS {
            assert!(COLUMNS.contains(&column), "{column} missing from schema");
        }
    }

    #[test]
    fn city_is_last_column() {
        assert_eq!(COLUMNS.last(), Some(&"City"));
        assert!(!NUMERIC_COLUMNS.contains(&"City"));
    }
}

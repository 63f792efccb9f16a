//! Normalized listing record produced by the extractor.

use serde::{Deserialize, Serialize};

/// One used-car listing, flattened from the four nested source blobs.
///
/// Every field except `features` and `city` may be absent prior to
/// imputation. `features` degrades to an empty string rather than a missing
/// value, and `city` is stamped by the assembler, never parsed from the row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingRecord {
    pub fuel_type: Option<String>,
    pub body_type: Option<String>,
    /// Kilometers driven, unit suffix and separators stripped.
    pub km_driven: Option<i64>,
    /// Owner category label, e.g. "First Owner".
    pub owner: Option<String>,
    /// Price in whole rupees, Lakh-scaled values already expanded.
    pub price: Option<i64>,
    pub manufacturing_year: Option<i64>,
    /// Source listing URL, used to identify the row in diagnostics.
    pub link: Option<String>,
    /// Comma-and-space joined feature list; empty when the listing has none.
    pub features: String,
    /// Manufacturer (original equipment manufacturer).
    pub oem: Option<String>,
    pub model: Option<String>,
    pub registration_year: Option<i64>,
    /// Fuel efficiency with the unit ("kmpl" or "km/kg") stripped.
    pub mileage: Option<f64>,
    /// Seat count as text; the specs fallback carries values like "5 Seats".
    pub seats: Option<String>,
    pub transmission: Option<String>,
    pub variant_name: Option<String>,
    /// Origin city, assigned by the assembler.
    pub city: String,
}

#[cfg(test)]
mod tests {
    use super::ListingRecord;

    #[test]
    fn record_serializes_round_trip() {
        let record = ListingRecord {
            fuel_type: Some("Petrol".to_string()),
            km_driven: Some(45_000),
            price: Some(550_000),
            features: "Power Steering, ABS".to_string(),
            city: "Chennai".to_string(),
            ..ListingRecord::default()
        };
        let json = serde_json::to_string(&record).expect("serialize record");
        let round: ListingRecord = serde_json::from_str(&json).expect("deserialize record");
        assert_eq!(round, record);
    }
}

//! One-row extraction: four blobs plus a link in, one record out.

use std::collections::BTreeMap;

use serde_json::Value;

use carlot_model::ListingRecord;

use crate::blob::{find_top_value, int_field, str_field, top_entries, value_to_string};
use crate::error::{ExtractError, Result};
use crate::normalize::{clean_km_driven, clean_mileage, clean_price};

/// The textual pieces of one raw export row.
///
/// Blob cells hold serialized JSON; an empty cell stands for an absent blob
/// and parses as an empty object.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawListing<'a> {
    pub detail: &'a str,
    pub overview: &'a str,
    pub features: &'a str,
    pub specs: &'a str,
    pub link: Option<&'a str>,
}

impl RawListing<'_> {
    /// Row identity for diagnostics.
    pub fn link_or_unknown(&self) -> &str {
        match self.link {
            Some(link) if !link.trim().is_empty() => link,
            _ => "unknown",
        }
    }
}

fn parse_blob(raw: &str, name: &'static str) -> Result<Value> {
    if raw.trim().is_empty() {
        return Ok(Value::Object(serde_json::Map::new()));
    }
    serde_json::from_str(raw).map_err(|source| ExtractError::BlobParse { blob: name, source })
}

/// Flatten one raw row into a [`ListingRecord`].
///
/// A parse failure on any blob aborts the whole row; partial extraction is
/// never attempted. The record's `city` is left empty for the assembler.
pub fn extract_listing(raw: &RawListing<'_>) -> Result<ListingRecord> {
    let detail = parse_blob(raw.detail, "detail")?;
    let overview = parse_blob(raw.overview, "overview")?;
    let features = parse_blob(raw.features, "features")?;
    let specs = parse_blob(raw.specs, "specs")?;

    // Overview wins over detail for ownership.
    let owner = find_top_value(&overview, "Owner").or_else(|| str_field(&detail, "owner"));

    let registration_year = match find_top_value(&overview, "Registration Year") {
        Some(value) if !value.trim().is_empty() => Some(
            value
                .trim()
                .parse::<i64>()
                .map_err(|_| ExtractError::InvalidRegistrationYear(value))?,
        ),
        _ => None,
    };

    let price = str_field(&detail, "price")
        .as_deref()
        .and_then(clean_price);

    let feature_list: Vec<String> = top_entries(&features)
        .into_iter()
        .map(|(_, value)| value)
        .collect();

    let spec_lookup: BTreeMap<String, String> = top_entries(&specs).into_iter().collect();
    let mileage = spec_lookup
        .get("Mileage")
        .map(String::as_str)
        .and_then(clean_mileage);

    let seats = seats_value(&detail).or_else(|| spec_lookup.get("Seats").cloned());

    let km_driven = str_field(&detail, "km")
        .as_deref()
        .and_then(clean_km_driven);

    Ok(ListingRecord {
        fuel_type: str_field(&detail, "ft"),
        body_type: str_field(&detail, "bt"),
        km_driven,
        owner,
        price,
        manufacturing_year: int_field(&detail, "modelYear"),
        link: raw.link.map(str::to_string),
        features: feature_list.join(", "),
        oem: str_field(&detail, "oem"),
        model: str_field(&detail, "model"),
        registration_year,
        mileage,
        seats,
        transmission: str_field(&detail, "transmission"),
        variant_name: str_field(&detail, "variantName"),
        city: String::new(),
    })
}

/// The detail blob's seat count, unless falsy (absent, zero, or empty).
fn seats_value(detail: &Value) -> Option<String> {
    match detail.get("seats")? {
        Value::Number(number) if number.as_f64() == Some(0.0) => None,
        Value::String(text) if text.is_empty() => None,
        value => value_to_string(value),
    }
}

#[cfg(test)]
mod tests {
    use super::{RawListing, extract_listing};
    use crate::error::ExtractError;

    const DETAIL: &str = r#"{
        "ft": "Petrol", "bt": "Hatchback", "km": "45,000 kms",
        "owner": "First Owner", "price": "₹ 5.5 Lakh", "modelYear": 2017,
        "oem": "Maruti", "model": "Maruti Swift", "seats": 5,
        "transmission": "Manual", "variantName": "VXI"
    }"#;
    const OVERVIEW: &str = r#"{"top": [
        {"key": "Registration Year", "value": "2018"},
        {"key": "Ownership", "value": "Second Owner"}
    ]}"#;
    const FEATURES: &str =
        r#"{"top": [{"key": "f1", "value": "Power Steering"}, {"key": "f2", "value": "ABS"}]}"#;
    const SPECS: &str = r#"{"top": [
        {"key": "Mileage", "value": "21.2 kmpl"},
        {"key": "Seats", "value": "5 Seats"}
    ]}"#;

    fn raw() -> RawListing<'static> {
        RawListing {
            detail: DETAIL,
            overview: OVERVIEW,
            features: FEATURES,
            specs: SPECS,
            link: Some("https://cars.example/listing/1"),
        }
    }

    #[test]
    fn extracts_well_formed_row() {
        let record = extract_listing(&raw()).unwrap();
        assert_eq!(record.fuel_type.as_deref(), Some("Petrol"));
        assert_eq!(record.body_type.as_deref(), Some("Hatchback"));
        assert_eq!(record.km_driven, Some(45_000));
        assert_eq!(record.price, Some(550_000));
        assert_eq!(record.manufacturing_year, Some(2017));
        assert_eq!(record.registration_year, Some(2018));
        assert_eq!(record.mileage, Some(21.2));
        assert_eq!(record.features, "Power Steering, ABS");
        assert_eq!(record.link.as_deref(), Some("https://cars.example/listing/1"));
        assert!(record.city.is_empty());
    }

    #[test]
    fn owner_from_overview_wins_over_detail() {
        // detail says First Owner, overview's Ownership entry says Second
        let record = extract_listing(&raw()).unwrap();
        assert_eq!(record.owner.as_deref(), Some("Second Owner"));
    }

    #[test]
    fn owner_falls_back_to_detail() {
        let record = extract_listing(&RawListing {
            overview: r#"{"top": [{"key": "Insurance", "value": "Valid"}]}"#,
            ..raw()
        })
        .unwrap();
        assert_eq!(record.owner.as_deref(), Some("First Owner"));
    }

    #[test]
    fn zero_seats_falls_back_to_specs() {
        let detail = DETAIL.replace("\"seats\": 5", "\"seats\": 0");
        let record = extract_listing(&RawListing {
            detail: &detail,
            ..raw()
        })
        .unwrap();
        assert_eq!(record.seats.as_deref(), Some("5 Seats"));
    }

    #[test]
    fn detail_seats_preferred_when_present() {
        let record = extract_listing(&raw()).unwrap();
        assert_eq!(record.seats.as_deref(), Some("5"));
    }

    #[test]
    fn malformed_blob_aborts_the_row() {
        let result = extract_listing(&RawListing {
            specs: "{not json",
            ..raw()
        });
        assert!(matches!(
            result,
            Err(ExtractError::BlobParse { blob: "specs", .. })
        ));
    }

    #[test]
    fn absent_blobs_parse_as_empty() {
        let record = extract_listing(&RawListing {
            detail: DETAIL,
            link: Some("x"),
            ..RawListing::default()
        })
        .unwrap();
        assert_eq!(record.owner.as_deref(), Some("First Owner"));
        assert_eq!(record.registration_year, None);
        assert_eq!(record.mileage, None);
        assert_eq!(record.features, "");
    }

    #[test]
    fn non_numeric_registration_year_is_a_row_error() {
        let overview = r#"{"top": [{"key": "Registration Year", "value": "Feb 2018"}]}"#;
        let result = extract_listing(&RawListing {
            overview,
            ..raw()
        });
        assert!(matches!(
            result,
            Err(ExtractError::InvalidRegistrationYear(_))
        ));
    }

    #[test]
    fn link_or_unknown_handles_blank_links() {
        assert_eq!(raw().link_or_unknown(), "https://cars.example/listing/1");
        assert_eq!(RawListing::default().link_or_unknown(), "unknown");
        assert_eq!(
            RawListing {
                link: Some("  "),
                ..RawListing::default()
            }
            .link_or_unknown(),
            "unknown"
        );
    }
}

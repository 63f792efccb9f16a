//! DataFrame construction from extracted records.

use polars::prelude::{AnyValue, Column, DataFrame, IntoColumn, NamedFrom, Series};

use carlot_model::ListingRecord;

use crate::error::Result;

/// Build the assembled frame in schema column order.
///
/// Integer-valued fields are stored as nullable Float64 so the imputer can
/// fill them with a mean without a lossy cast; text fields are nullable
/// String. `features` and `City` are never null.
pub fn records_to_frame(records: &[ListingRecord]) -> Result<DataFrame> {
    let n = records.len();
    let mut fuel_type = Vec::with_capacity(n);
    let mut body_type = Vec::with_capacity(n);
    let mut km_driven = Vec::with_capacity(n);
    let mut owner = Vec::with_capacity(n);
    let mut price = Vec::with_capacity(n);
    let mut manufacturing_year = Vec::with_capacity(n);
    let mut link = Vec::with_capacity(n);
    let mut features = Vec::with_capacity(n);
    let mut oem = Vec::with_capacity(n);
    let mut model = Vec::with_capacity(n);
    let mut registration_year = Vec::with_capacity(n);
    let mut mileage = Vec::with_capacity(n);
    let mut seats = Vec::with_capacity(n);
    let mut transmission = Vec::with_capacity(n);
    let mut variant_name = Vec::with_capacity(n);
    let mut city = Vec::with_capacity(n);

    for record in records {
        fuel_type.push(record.fuel_type.clone());
        body_type.push(record.body_type.clone());
        km_driven.push(record.km_driven.map(|value| value as f64));
        owner.push(record.owner.clone());
        price.push(record.price.map(|value| value as f64));
        manufacturing_year.push(record.manufacturing_year.map(|value| value as f64));
        link.push(record.link.clone());
        features.push(record.features.clone());
        oem.push(record.oem.clone());
        model.push(record.model.clone());
        registration_year.push(record.registration_year.map(|value| value as f64));
        mileage.push(record.mileage);
        seats.push(record.seats.clone());
        transmission.push(record.transmission.clone());
        variant_name.push(record.variant_name.clone());
        city.push(record.city.clone());
    }

    let columns: Vec<Column> = vec![
        Series::new("fuel_type".into(), fuel_type).into_column(),
        Series::new("body_type".into(), body_type).into_column(),
        Series::new("km_driven".into(), km_driven).into_column(),
        Series::new("owner".into(), owner).into_column(),
        Series::new("price".into(), price).into_column(),
        Series::new("manufacturing_year".into(), manufacturing_year).into_column(),
        Series::new("link".into(), link).into_column(),
        Series::new("features".into(), features).into_column(),
        Series::new("oem".into(), oem).into_column(),
        Series::new("model".into(), model).into_column(),
        Series::new("registration_year".into(), registration_year).into_column(),
        Series::new("Mileage".into(), mileage).into_column(),
        Series::new("Seats".into(), seats).into_column(),
        Series::new("transmission".into(), transmission).into_column(),
        Series::new("variantName".into(), variant_name).into_column(),
        Series::new("City".into(), city).into_column(),
    ];
    Ok(DataFrame::new(columns)?)
}

/// Render a cell as text; null becomes the empty string.
pub fn any_to_string(value: AnyValue) -> String {
    match value {
        AnyValue::String(value) => value.to_string(),
        AnyValue::StringOwned(value) => value.to_string(),
        AnyValue::Null => String::new(),
        _ => value.to_string(),
    }
}

/// A cell as f64 where the dtype allows it.
pub fn any_to_f64(value: AnyValue) -> Option<f64> {
    match value {
        AnyValue::Null => None,
        AnyValue::Float32(value) => Some(value as f64),
        AnyValue::Float64(value) => Some(value),
        AnyValue::Int32(value) => Some(value as f64),
        AnyValue::Int64(value) => Some(value as f64),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::records_to_frame;
    use carlot_model::{COLUMNS, ListingRecord};
    use polars::prelude::DataType;

    fn record(city: &str) -> ListingRecord {
        ListingRecord {
            fuel_type: Some("Petrol".to_string()),
            km_driven: Some(45_000),
            price: Some(550_000),
            features: "ABS".to_string(),
            city: city.to_string(),
            ..ListingRecord::default()
        }
    }

    #[test]
    fn frame_has_schema_columns_in_order() {
        let frame = records_to_frame(&[record("Delhi"), record("Delhi")]).unwrap();
        let names: Vec<&str> = frame
            .get_column_names()
            .into_iter()
            .map(|name| name.as_str())
            .collect();
        assert_eq!(names, COLUMNS.to_vec());
        assert_eq!(frame.height(), 2);
    }

    #[test]
    fn numeric_columns_are_float64() {
        let frame = records_to_frame(&[record("Delhi")]).unwrap();
        for name in carlot_model::NUMERIC_COLUMNS {
            assert_eq!(
                frame.column(name).unwrap().dtype(),
                &DataType::Float64,
                "{name} dtype"
            );
        }
        assert_eq!(
            frame.column("owner").unwrap().dtype(),
            &DataType::String
        );
    }

    #[test]
    fn missing_values_become_nulls() {
        let frame = records_to_frame(&[record("Delhi")]).unwrap();
        assert_eq!(frame.column("owner").unwrap().null_count(), 1);
        assert_eq!(frame.column("Mileage").unwrap().null_count(), 1);
        // features and City never carry nulls
        assert_eq!(frame.column("features").unwrap().null_count(), 0);
        assert_eq!(frame.column("City").unwrap().null_count(), 0);
    }

    #[test]
    fn empty_record_set_builds_empty_frame() {
        let frame = records_to_frame(&[]).unwrap();
        assert_eq!(frame.height(), 0);
        assert_eq!(frame.width(), COLUMNS.len());
    }
}

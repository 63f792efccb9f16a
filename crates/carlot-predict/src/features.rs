//! Serving-time encoding of a prediction request.

use std::collections::BTreeMap;

use tracing::warn;

use carlot_model::{PredictionRequest, UnknownCategory, vocab};

/// A request expanded into the model's feature space.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedInput {
    /// Feature name to value; carries every column the serving schema knows.
    pub values: BTreeMap<String, f64>,
    /// Category values the vocabulary did not recognize. Their groups
    /// contribute all-zero flags — reported, not silently dropped.
    pub unknown_categories: Vec<UnknownCategory>,
}

/// One-hot expand a request against the fixed vocabulary.
pub fn encode_request(request: &PredictionRequest) -> EncodedInput {
    let mut values = BTreeMap::new();
    values.insert("km_driven".to_string(), request.km_driven as f64);
    values.insert(
        "manufacturing_year".to_string(),
        request.manufacturing_year as f64,
    );

    let seats = request.seats.to_string();
    let group_values: [(&str, &str); 6] = [
        ("fuel_type", request.fuel_type.as_str()),
        ("body_type", request.body_type.as_str()),
        ("owner", request.owner.as_str()),
        ("transmission", request.transmission.as_str()),
        ("City", request.city.as_str()),
        ("Seats", seats.as_str()),
    ];

    let mut unknown_categories = Vec::new();
    for (group, value) in group_values {
        let categories = vocab::ONE_HOT_GROUPS
            .iter()
            .find(|(name, _)| *name == group)
            .map(|(_, categories)| *categories)
            .unwrap_or(&[]);
        if !categories.contains(&value) {
            warn!(field = group, value, "category outside model vocabulary");
            unknown_categories.push(UnknownCategory {
                field: group.to_string(),
                value: value.to_string(),
            });
        }
        for category in categories {
            let flag = if *category == value { 1.0 } else { 0.0 };
            values.insert(vocab::flag_column(group, category), flag);
        }
    }
    EncodedInput {
        values,
        unknown_categories,
    }
}

#[cfg(test)]
mod tests {
    use super::encode_request;
    use carlot_model::PredictionRequest;

    fn request() -> PredictionRequest {
        PredictionRequest {
            km_driven: 45_000,
            manufacturing_year: 2019,
            seats: 5,
            fuel_type: "Petrol".to_string(),
            body_type: "Hatchback".to_string(),
            owner: "First Owner".to_string(),
            transmission: "Manual".to_string(),
            city: "Chennai".to_string(),
        }
    }

    #[test]
    fn known_request_sets_one_flag_per_group() {
        let encoded = encode_request(&request());
        assert!(encoded.unknown_categories.is_empty());
        assert_eq!(encoded.values["km_driven"], 45_000.0);
        assert_eq!(encoded.values["fuel_type_Petrol"], 1.0);
        assert_eq!(encoded.values["fuel_type_Diesel"], 0.0);
        assert_eq!(encoded.values["City_Chennai"], 1.0);
        assert_eq!(encoded.values["Seats_5"], 1.0);
        assert_eq!(encoded.values.len(), 34);
    }

    #[test]
    fn unknown_category_reports_and_zeroes_the_group() {
        let encoded = encode_request(&PredictionRequest {
            fuel_type: "Hydrogen".to_string(),
            ..request()
        });
        assert_eq!(encoded.unknown_categories.len(), 1);
        assert_eq!(encoded.unknown_categories[0].field, "fuel_type");
        assert_eq!(encoded.unknown_categories[0].value, "Hydrogen");
        for category in carlot_model::vocab::FUEL_TYPES {
            assert_eq!(encoded.values[&format!("fuel_type_{category}")], 0.0);
        }
    }

    #[test]
    fn unusual_seat_count_degrades_the_same_way() {
        let encoded = encode_request(&PredictionRequest {
            seats: 11,
            ..request()
        });
        assert_eq!(encoded.unknown_categories[0].field, "Seats");
        for category in carlot_model::vocab::SEATS {
            assert_eq!(encoded.values[&format!("Seats_{category}")], 0.0);
        }
    }
}

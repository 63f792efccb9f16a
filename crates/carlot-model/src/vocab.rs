//! Fixed category vocabulary agreed with the trained price model.
//!
//! The regression model was trained against one-hot flags derived from these
//! exact category sets. Encoding (dataset or serving side) must use the same
//! vocabulary: a value outside it produces all-zero flags for its group, by
//! policy, rather than inventing a new column the model has never seen.

/// Categorical columns that are one-hot expanded, with their categories.
pub const ONE_HOT_GROUPS: [(&str, &[&str]); 6] = [
    ("fuel_type", &FUEL_TYPES),
    ("body_type", &BODY_TYPES),
    ("owner", &OWNERS),
    ("transmission", &TRANSMISSIONS),
    ("City", &CITIES),
    ("Seats", &SEATS),
];

pub const FUEL_TYPES: [&str; 5] = ["Cng", "Diesel", "Electric", "Lpg", "Petrol"];

pub const BODY_TYPES: [&str; 7] = [
    "Coupe",
    "Hatchback",
    "MUV",
    "Minivans",
    "Pickup Trucks",
    "SUV",
    "Sedan",
];

pub const OWNERS: [&str; 6] = [
    "0th Owner",
    "First Owner",
    "Second Owner",
    "Third Owner",
    "Fourth Owner",
    "Fifth Owner",
];

pub const TRANSMISSIONS: [&str; 2] = ["Automatic", "Manual"];

pub const CITIES: [&str; 6] = [
    "Bangalore",
    "Chennai",
    "Delhi",
    "Hyderabad",
    "Jaipur",
    "Kolkata",
];

pub const SEATS: [&str; 6] = ["2", "4", "5", "6", "7", "8"];

/// Numeric features passed through to the model without expansion.
pub const NUMERIC_FEATURES: [&str; 2] = ["km_driven", "manufacturing_year"];

/// Flag column name for one category of a one-hot group.
pub fn flag_column(group: &str, category: &str) -> String {
    format!("{group}_{category}")
}

/// All feature columns the serving layer can produce, in schema order.
pub fn feature_columns() -> Vec<String> {
    let mut columns: Vec<String> = NUMERIC_FEATURES
        .iter()
        .map(|name| (*name).to_string())
        .collect();
    for (group, categories) in ONE_HOT_GROUPS {
        for category in categories {
            columns.push(flag_column(group, category));
        }
    }
    columns
}

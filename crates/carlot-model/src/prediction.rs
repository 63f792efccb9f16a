//! Request and response types for the prediction-serving surface.

use serde::{Deserialize, Serialize};

/// One car to price, expressed in the vocabulary the model was trained on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub km_driven: i64,
    pub manufacturing_year: i64,
    pub seats: u32,
    pub fuel_type: String,
    pub body_type: String,
    /// Owner category label, e.g. "First Owner".
    pub owner: String,
    pub transmission: String,
    pub city: String,
}

/// Price estimate for a single request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    /// Estimated price in whole rupees.
    pub price: f64,
    /// Category values the fixed vocabulary did not recognize; their flag
    /// groups contributed all zeros to the estimate.
    pub unknown_categories: Vec<UnknownCategory>,
}

/// A category value outside the agreed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnknownCategory {
    pub field: String,
    pub value: String,
}

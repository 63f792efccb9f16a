pub mod error;
pub mod features;
pub mod model;

pub use error::{PredictError, Result};
pub use features::{EncodedInput, encode_request};
pub use model::PriceModel;

use carlot_model::{PredictionRequest, PredictionResponse};

/// Encode a request and score it in one step.
pub fn predict_price(model: &PriceModel, request: &PredictionRequest) -> Result<PredictionResponse> {
    let encoded = encode_request(request);
    let price = model.predict(&encoded)?;
    Ok(PredictionResponse {
        price,
        unknown_categories: encoded.unknown_categories,
    })
}

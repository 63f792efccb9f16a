//! Pre-trained linear price model, persisted as JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use carlot_model::vocab;

use crate::error::{PredictError, Result};
use crate::features::EncodedInput;

/// Opaque scoring function: intercept plus one coefficient per feature
/// column, exported at training time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceModel {
    pub intercept: f64,
    pub columns: Vec<String>,
    pub coefficients: Vec<f64>,
}

impl PriceModel {
    /// Load and structurally validate a model file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| PredictError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let model: PriceModel =
            serde_json::from_str(&text).map_err(|source| PredictError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        model.check_arity()?;
        debug!(path = %path.display(), columns = model.columns.len(), "model loaded");
        Ok(model)
    }

    fn check_arity(&self) -> Result<()> {
        if self.columns.len() != self.coefficients.len() {
            return Err(PredictError::ArityMismatch {
                columns: self.columns.len(),
                coefficients: self.coefficients.len(),
            });
        }
        Ok(())
    }

    /// Score one encoded input.
    ///
    /// The input is aligned to the model's column schema by name. A model
    /// column missing from the input reads as 0.0 only if the serving
    /// schema could ever produce it; anything else is a schema mismatch and
    /// no prediction is made.
    pub fn predict(&self, input: &EncodedInput) -> Result<f64> {
        self.check_arity()?;
        let serving_schema = vocab::feature_columns();
        let mut estimate = self.intercept;
        for (column, coefficient) in self.columns.iter().zip(&self.coefficients) {
            let value = match input.values.get(column) {
                Some(value) => *value,
                None if serving_schema.contains(column) => 0.0,
                None => {
                    return Err(PredictError::SchemaMismatch {
                        column: column.clone(),
                    });
                }
            };
            estimate += coefficient * value;
        }
        Ok(estimate)
    }
}

//! One-hot expansion of categorical columns against the fixed vocabulary.

use std::collections::BTreeSet;

use polars::prelude::{AnyValue, Column, DataFrame, IntoColumn, NamedFrom, Series};
use tracing::debug;

use carlot_model::vocab;

use crate::error::Result;
use crate::frame::any_to_string;

/// Expand every vocabulary group present in the frame into 0/1 flag columns.
///
/// Source columns are dropped; the remaining columns keep their order and
/// the flag columns follow in vocabulary order. A cell value outside the
/// vocabulary yields all zeros for its group — the model has no column for
/// it, so inventing one would only shift the schema.
pub fn one_hot_encode(frame: &DataFrame) -> Result<DataFrame> {
    let height = frame.height();
    let encoded_names: Vec<&str> = vocab::ONE_HOT_GROUPS
        .iter()
        .filter(|(group, _)| frame.column(group).is_ok())
        .map(|(group, _)| *group)
        .collect();

    let mut columns: Vec<Column> = Vec::new();
    for column in frame.get_columns() {
        if !encoded_names.contains(&column.name().as_str()) {
            columns.push(column.clone());
        }
    }

    for (group, categories) in vocab::ONE_HOT_GROUPS {
        let Ok(source) = frame.column(group) else {
            continue;
        };
        let values: Vec<String> = (0..height)
            .map(|idx| any_to_string(source.get(idx).unwrap_or(AnyValue::Null)))
            .collect();
        let mut unknown: BTreeSet<&str> = BTreeSet::new();
        for value in &values {
            if !value.is_empty() && !categories.contains(&value.as_str()) {
                unknown.insert(value);
            }
        }
        if !unknown.is_empty() {
            debug!(
                column = group,
                values = ?unknown,
                "values outside the model vocabulary encode as all-zero flags"
            );
        }
        for category in categories {
            let flags: Vec<f64> = values
                .iter()
                .map(|value| if value == category { 1.0 } else { 0.0 })
                .collect();
            columns.push(
                Series::new(vocab::flag_column(group, category).into(), flags).into_column(),
            );
        }
    }
    Ok(DataFrame::new(columns)?)
}
